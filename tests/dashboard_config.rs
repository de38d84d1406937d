use crypto_dashboard_wasm::config::DashboardConfig;
use crypto_dashboard_wasm::domain::errors::ErrorKind;
use crypto_dashboard_wasm::domain::logging::LogLevel;
use crypto_dashboard_wasm::domain::market_data::{AlignmentPolicy, Coin, Currency, DayRange};

#[test]
fn empty_object_is_the_stock_dashboard() {
    let config = DashboardConfig::from_json("{}").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.api.base_url, "https://api.coingecko.com/api/v3");
    assert_eq!(config.api.request_timeout_ms, 15_000);
    assert_eq!(config.alignment, AlignmentPolicy::Truncate);
    assert_eq!(config.defaults.coin, Coin::Bitcoin);
    assert_eq!(config.defaults.currency, Currency::Usd);
    assert_eq!(config.defaults.range, DayRange::Month);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let config = DashboardConfig::from_json(
        r#"{
            "api": { "request_timeout_ms": 5000 },
            "defaults": { "coin": "dogecoin", "range": "7" },
            "alignment": "strict",
            "log_level": "debug"
        }"#,
    )
    .unwrap();
    assert_eq!(config.api.request_timeout_ms, 5000);
    assert_eq!(config.api.base_url, "https://api.coingecko.com/api/v3");
    assert_eq!(config.defaults.coin, Coin::Dogecoin);
    assert_eq!(config.defaults.currency, Currency::Usd);
    assert_eq!(config.defaults.range, DayRange::Week);
    assert_eq!(config.alignment, AlignmentPolicy::Strict);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn rejects_invalid_values() {
    for json in [
        r#"{ "api": { "base_url": "  " } }"#,
        r#"{ "api": { "request_timeout_ms": 0 } }"#,
        r#"{ "defaults": { "coin": "solana" } }"#,
        "not json",
    ] {
        let err = DashboardConfig::from_json(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "{json}");
    }
}
