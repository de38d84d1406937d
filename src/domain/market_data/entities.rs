pub use super::value_objects::{Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// One `[timestampMillis, value]` pair of a CoinGecko series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct SeriesPoint {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp_ms: u64, value: f64) -> Self {
        Self { timestamp: Timestamp::from_millis(timestamp_ms), value }
    }
}

impl From<(f64, f64)> for SeriesPoint {
    fn from((timestamp, value): (f64, f64)) -> Self {
        // saturating: negative or NaN timestamps clamp to 0
        Self { timestamp: Timestamp::from_millis(timestamp as u64), value }
    }
}

impl From<SeriesPoint> for (f64, f64) {
    fn from(point: SeriesPoint) -> Self {
        (point.timestamp.value() as f64, point.value)
    }
}

/// Market chart payload. Both series are assumed index-aligned; nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeriesResponse {
    pub prices: Vec<SeriesPoint>,
    pub total_volumes: Vec<SeriesPoint>,
}

impl RawSeriesResponse {
    pub fn new(prices: Vec<SeriesPoint>, total_volumes: Vec<SeriesPoint>) -> Self {
        Self { prices, total_volumes }
    }

    pub fn is_aligned(&self) -> bool {
        self.prices.len() == self.total_volumes.len()
    }
}

/// One date-labelled price/volume point ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub date_label: String,
    pub timestamp: Timestamp,
    pub price: Price,
    pub volume: Volume,
}

impl ChartRecord {
    pub fn new(date_label: String, timestamp: Timestamp, price: Price, volume: Volume) -> Self {
        Self { date_label, timestamp, price, volume }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coingecko_payload_and_ignores_market_caps() {
        let json = r#"{
            "prices": [[1711843200000, 69702.3], [1711929600000, 71246.9]],
            "market_caps": [[1711843200000, 1.37e12]],
            "total_volumes": [[1711843200000, 1.6e10], [1711929600000, 2.1e10]]
        }"#;
        let raw: RawSeriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.prices.len(), 2);
        assert_eq!(raw.prices[0].timestamp.value(), 1_711_843_200_000);
        assert_eq!(raw.total_volumes[1].value, 2.1e10);
        assert!(raw.is_aligned());
    }

    #[test]
    fn missing_total_volumes_is_an_error() {
        let json = r#"{ "prices": [[1000, 1.0]] }"#;
        assert!(serde_json::from_str::<RawSeriesResponse>(json).is_err());
    }
}
