use chrono::DateTime;

use crate::domain::market_data::Timestamp;

/// Calendar date label in en-US short form (`M/D/YYYY`), UTC.
///
/// Timestamps outside chrono's range yield `Invalid Date`.
pub fn format_date_label(timestamp: Timestamp) -> String {
    i64::try_from(timestamp.value())
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Wall-clock label for log lines, `HH:MM:SS.mmm` UTC
pub fn format_log_time(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| format!("{:06}", timestamp_ms))
}
