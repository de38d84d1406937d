use leptos::*;
use std::rc::Rc;
use strum::IntoEnumIterator;

use super::charts::{ChartKind, ChartPanel};
use super::state::DashboardSignals;
use crate::{
    application::FetchPipeline,
    config::DashboardConfig,
    domain::{
        logging::LogComponent,
        market_data::{Coin, Currency, DayRange},
    },
    infrastructure::http::CoinGeckoClient,
};
use crate::{log_debug, log_info};

const STYLES: &str = r#"
.crypto-dashboard {
    padding: 30px;
    font-family: Arial, sans-serif;
    background: #f5f6fa;
    min-height: 100vh;
}

.crypto-dashboard h1 {
    text-align: center;
    margin-bottom: 30px;
    color: #2f3640;
}

.controls {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 5px;
    margin-bottom: 20px;
}

.selector-btn {
    padding: 8px 16px;
    border: 1px solid #dcdde1;
    background-color: #f5f6fa;
    font-weight: bold;
    cursor: pointer;
    color: #2f3640;
}

.selector-btn.active {
    border: 2px solid #f2f5f7;
    background-color: #74b9ff;
}

.status {
    text-align: center;
    min-height: 24px;
    margin-bottom: 16px;
    color: #2f3640;
}

.error-banner {
    display: inline-block;
    padding: 6px 12px;
    background: #ffeeee;
    border: 1px solid #e84118;
    border-radius: 5px;
    color: #c23616;
}

.charts {
    display: grid;
    gap: 40px;
}

.chart-card {
    padding: 20px;
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

.chart-card h2 {
    margin-bottom: 20px;
    color: #2f3640;
}

.chart-body {
    position: relative;
    width: 100%;
    height: 300px;
}

.chart-canvas {
    width: 100%;
    height: 300px;
    display: block;
}

.chart-tooltip {
    position: absolute;
    pointer-events: none;
    background: #ffffff;
    border: 1px solid #cccccc;
    padding: 8px 10px;
    font-size: 12px;
    white-space: nowrap;
}

.tooltip-date {
    margin-bottom: 4px;
    color: #2f3640;
}
"#;

/// 🦀 Crypto dashboard root. Owns the selection signals and the fetch pipeline.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let signals = DashboardSignals::new(config.defaults);
    let pipeline = Rc::new(FetchPipeline::new(CoinGeckoClient::new(&config.api), config.alignment));
    pipeline.subscribe(move |state| signals.fetch_state.set(state.clone()));

    // Selection change → resolve; the pipeline supersedes whatever is in flight
    {
        let pipeline = Rc::clone(&pipeline);
        create_effect(move |_| {
            let selection = signals.selection();
            if let Some(pending) = pipeline.resolve(&selection).pending {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = pending.await;
                    log_debug!(LogComponent::Presentation("App"), "fetch finished: {:?}", outcome);
                });
            }
        });
    }

    let resize = window_event_listener(ev::resize, move |_| {
        signals.viewport_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
    });
    on_cleanup(move || {
        resize.remove();
        pipeline.shutdown();
        log_info!(LogComponent::Presentation("App"), "🧹 Dashboard unmounted");
    });

    view! {
        <style>{STYLES}</style>
        <div class="crypto-dashboard">
            <h1>"Crypto Dashboard"</h1>
            <SelectorBar signals=signals />
            <StatusBar signals=signals />
            <div class="charts">
                <ChartPanel title="Price Trend" kind=ChartKind::Price signals=signals />
                <ChartPanel title="Volume" kind=ChartKind::Volume signals=signals />
            </div>
        </div>
    }
}

/// Coin, currency and range button groups
#[component]
fn SelectorBar(signals: DashboardSignals) -> impl IntoView {
    let coins = Coin::iter()
        .map(|coin| {
            view! {
                <button
                    class="selector-btn"
                    class:active=move || signals.coin.get() == coin
                    on:click=move |_| signals.coin.set(coin)
                >
                    {coin.display_name()}
                </button>
            }
        })
        .collect_view();

    let currencies = Currency::iter()
        .map(|currency| {
            view! {
                <button
                    class="selector-btn"
                    class:active=move || signals.currency.get() == currency
                    on:click=move |_| signals.currency.set(currency)
                >
                    {currency.label()}
                </button>
            }
        })
        .collect_view();

    let ranges = DayRange::iter()
        .map(|range| {
            view! {
                <button
                    class="selector-btn"
                    class:active=move || signals.range.get() == range
                    on:click=move |_| signals.range.set(range)
                >
                    {range.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="controls">{coins}{currencies}{ranges}</div> }
}

/// Loading indicator and the last error, if any
#[component]
fn StatusBar(signals: DashboardSignals) -> impl IntoView {
    let loading = move || signals.fetch_state.with(|s| s.loading);
    let error = move || signals.fetch_state.with(|s| s.error.clone());

    view! {
        <div class="status">
            <Show when=loading>
                <span class="loading">"Loading…"</span>
            </Show>
            {move || error().map(|e| view! { <div class="error-banner">{e.to_string()}</div> })}
        </div>
    }
}
