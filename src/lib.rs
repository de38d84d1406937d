use leptos::*;
use wasm_bindgen::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::logging::LogComponent;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger, load_dashboard_config};
use crate::presentation::App;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod number_format;
pub mod presentation;
pub mod time_utils;

/// Entry point: logging, config, then mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match load_dashboard_config() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };

    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    if let Some(e) = config_error {
        log_warn!(LogComponent::Presentation("Initialize"), "⚠️ {} - using defaults", e);
    }
    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Crypto dashboard starting with {:?}",
        config.defaults
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}
