//! Dashboard configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock dashboard: CoinGecko public API, bitcoin/usd/30 days.

use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DashboardError,
    logging::LogLevel,
    market_data::{AlignmentPolicy, Selection},
};

/// Upstream API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            request_timeout_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    /// Selection shown on first mount
    pub defaults: Selection,
    pub alignment: AlignmentPolicy,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            defaults: Selection::default(),
            alignment: AlignmentPolicy::Truncate,
            log_level: LogLevel::Info,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| DashboardError::Config(format!("Failed to parse dashboard config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.api.base_url.trim().is_empty() {
            return Err(DashboardError::Config("api.base_url must not be empty".to_string()));
        }
        if self.api.request_timeout_ms == 0 {
            return Err(DashboardError::Config("api.request_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }
}
