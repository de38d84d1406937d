//! Browser-only checks. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use crypto_dashboard_wasm::domain::errors::DashboardError;
use crypto_dashboard_wasm::domain::logging::{LogComponent, LogLevel, Logger, TimeProvider};
use crypto_dashboard_wasm::domain::market_data::{ChartRecord, Price, Timestamp, Volume};
use crypto_dashboard_wasm::infrastructure::http::GlooHttpClient;
use crypto_dashboard_wasm::infrastructure::rendering::{CanvasRenderer, price_line, volume_bars};
use crypto_dashboard_wasm::infrastructure::services::{
    BrowserTimeProvider, CONFIG_ELEMENT_ID, ConsoleLogger, load_dashboard_config,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn canvas(width: u32) -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = document().create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.style().set_property("width", &format!("{width}px")).unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn browser_clock_is_wall_time() {
    let clock = BrowserTimeProvider::new();
    // 2020-01-01
    assert!(clock.current_timestamp() > 1_577_836_800_000);
    assert_eq!(clock.format_timestamp(3_723_004), "01:02:03.004");
}

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new_development();
    assert_eq!(logger.min_level(), LogLevel::Debug);
    logger.debug(LogComponent::Infrastructure("test"), "debug line");
    logger.error(LogComponent::Infrastructure("test"), "error line");
}

#[wasm_bindgen_test]
fn renderer_fits_canvas_to_css_width() {
    let element = canvas(480);
    let renderer = CanvasRenderer::attach(element.clone()).unwrap();
    let layout = renderer.fit_layout(300);
    assert_eq!(element.width(), 480);
    assert_eq!(element.height(), 300);
    assert_eq!(layout.width, 480.0);

    let records: Vec<ChartRecord> = (0..30)
        .map(|i| {
            ChartRecord::new(
                format!("4/{}/2024", i + 1),
                Timestamp::from_millis(i * 86_400_000),
                Price::new(60_000.0 + i as f64 * 100.0),
                Volume::new(1.0e10 + i as f64 * 1.0e8),
            )
        })
        .collect();
    renderer.draw(&price_line(&records, &layout, "$"), &layout).unwrap();
    renderer.draw(&volume_bars(&records, &layout, "$"), &layout).unwrap();
    renderer.draw(&price_line(&[], &layout, "$"), &layout).unwrap();
}

#[wasm_bindgen_test]
fn reads_embedded_config() {
    let script = document().create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{ "defaults": { "currency": "inr" } }"#));
    document().body().unwrap().append_child(&script).unwrap();

    let config = load_dashboard_config().unwrap();
    assert_eq!(config.defaults.currency.code(), "inr");

    script.remove();
    assert_eq!(load_dashboard_config().unwrap(), Default::default());
}

#[wasm_bindgen_test]
async fn slow_request_times_out_as_network_error() {
    // non-routable address: the connect attempt hangs far longer than 1 ms
    let client = GlooHttpClient::new().with_timeout(1);
    match client.get_text("http://10.255.255.1/market_chart".to_string()).await {
        Err(DashboardError::Network(msg)) => assert!(msg.contains("timed out after 1 ms"), "{msg}"),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[wasm_bindgen_test]
async fn non_success_status_is_network_error() {
    let client = GlooHttpClient::new();
    match client.get_text("/no-such-market-chart.json".to_string()).await {
        Err(DashboardError::Network(msg)) => assert!(msg.contains("HTTP error: 404"), "{msg}"),
        other => panic!("expected 404, got {other:?}"),
    }
}
