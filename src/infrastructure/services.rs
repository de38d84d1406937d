//! Browser implementations of the domain logging services, plus config loading.

use crate::config::DashboardConfig;
use crate::domain::{
    errors::DashboardError,
    logging::{LogEntry, LogLevel, Logger, TimeProvider},
};
use crate::time_utils::format_log_time;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Writes to the browser console, dropping entries below `min_level`
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = entry.formatted();
        match entry.level {
            LogLevel::Error => gloo::console::error!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Debug | LogLevel::Trace => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::log!(line),
        }
    }
}

/// Wall clock from `Date.now()`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_log_time(timestamp)
    }
}

/// Read the config embedded in the page. No element means defaults.
pub fn load_dashboard_config() -> Result<DashboardConfig, DashboardError> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => DashboardConfig::from_json(&json),
        _ => Ok(DashboardConfig::default()),
    }
}
