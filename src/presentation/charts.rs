use leptos::html::Canvas;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::state::DashboardSignals;
use crate::domain::{logging::LogComponent, market_data::ChartRecord};
use crate::infrastructure::rendering::{CanvasRenderer, ChartLayout, price_line, volume_bars};
use crate::number_format::format_grouped;
use crate::log_error;

pub const CHART_HEIGHT_PX: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Price,
    Volume,
}

/// Record under the cursor plus where to put the tooltip
#[derive(Debug, Clone, PartialEq)]
struct Hover {
    x: f64,
    y: f64,
    record: ChartRecord,
}

/// 📊 Card with one canvas chart and a hover tooltip
#[component]
pub fn ChartPanel(title: &'static str, kind: ChartKind, signals: DashboardSignals) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer: Rc<RefCell<Option<CanvasRenderer>>> = Rc::new(RefCell::new(None));
    let last_layout: Rc<Cell<Option<ChartLayout>>> = Rc::new(Cell::new(None));
    let hover = create_rw_signal::<Option<Hover>>(None);

    // Repaint on new records, currency or viewport changes
    {
        let last_layout = Rc::clone(&last_layout);
        create_effect(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let _ = signals.viewport_epoch.get();
            let records = signals.fetch_state.with(|s| Rc::clone(&s.records));
            let symbol = signals.data_symbol();

            let mut slot = renderer.borrow_mut();
            if slot.is_none() {
                match CanvasRenderer::attach((*canvas).clone()) {
                    Ok(attached) => *slot = Some(attached),
                    Err(e) => {
                        log_error!(LogComponent::Presentation("ChartPanel"), "❌ {}: {:?}", title, e);
                        return;
                    }
                }
            }
            let Some(painter) = slot.as_ref() else {
                return;
            };

            let layout = painter.fit_layout(CHART_HEIGHT_PX);
            let geometry = match kind {
                ChartKind::Price => price_line(&records, &layout, symbol),
                ChartKind::Volume => volume_bars(&records, &layout, symbol),
            };
            if let Err(e) = painter.draw(&geometry, &layout) {
                log_error!(LogComponent::Presentation("ChartPanel"), "❌ {} render error: {:?}", title, e);
            }
            last_layout.set(Some(layout));
            hover.set(None);
        });
    }

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(layout) = last_layout.get() else {
            return;
        };
        let x = ev.offset_x() as f64;
        let record = signals.fetch_state.with_untracked(|s| {
            layout.hit_index(x, s.records.len()).and_then(|i| s.records.get(i).cloned())
        });
        hover.set(record.map(|record| Hover { x, y: ev.offset_y() as f64, record }));
    };

    let tooltip = move || {
        hover.get().map(|h| {
            let symbol = signals.data_symbol();
            let line = match kind {
                ChartKind::Price => format!("price : {}{}", symbol, format_grouped(h.record.price.value(), 2)),
                ChartKind::Volume => format!("volume : {}{}", symbol, format_grouped(h.record.volume.value(), 0)),
            };
            view! {
                <div class="chart-tooltip" style=format!("left: {}px; top: {}px;", h.x + 12.0, h.y + 12.0)>
                    <div class="tooltip-date">{h.record.date_label.clone()}</div>
                    <div>{line}</div>
                </div>
            }
        })
    };

    view! {
        <div class="chart-card">
            <h2>{title}</h2>
            <div class="chart-body">
                <canvas
                    node_ref=canvas_ref
                    class="chart-canvas"
                    on:mousemove=on_move
                    on:mouseleave=move |_| hover.set(None)
                />
                {tooltip}
            </div>
        </div>
    }
}
