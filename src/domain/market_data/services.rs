use serde::{Deserialize, Serialize};

use super::entities::{ChartRecord, RawSeriesResponse};
use super::value_objects::{Price, Volume};
use crate::domain::errors::{DashboardError, DeriveResult};
use crate::domain::logging::LogComponent;
use crate::time_utils::format_date_label;

/// How to derive records when `total_volumes` is shorter or longer than `prices`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Derive `min(prices, total_volumes)` records
    #[default]
    Truncate,
    /// Fail with `OutOfRange` at the first price without a volume
    Strict,
}

/// Turn a raw payload into one record per price index.
pub fn derive_chart_records(
    raw: &RawSeriesResponse,
    policy: AlignmentPolicy,
) -> DeriveResult<Vec<ChartRecord>> {
    let prices = raw.prices.len();
    let volumes = raw.total_volumes.len();

    if prices > volumes && policy == AlignmentPolicy::Strict {
        return Err(DashboardError::OutOfRange { index: volumes, len: volumes });
    }
    if !raw.is_aligned() {
        crate::log_warn!(
            LogComponent::Domain("ChartRecords"),
            "⚠️ Series length mismatch: {} prices vs {} volumes, truncating",
            prices,
            volumes
        );
    }

    let records = raw
        .prices
        .iter()
        .zip(raw.total_volumes.iter())
        .map(|(price, volume)| {
            ChartRecord::new(
                format_date_label(price.timestamp),
                price.timestamp,
                Price::new(price.value),
                Volume::new(volume.value),
            )
        })
        .collect();

    Ok(records)
}

/// `(min, max)` price over the records, `None` when empty
pub fn price_range(records: &[ChartRecord]) -> Option<(Price, Price)> {
    let first = records.first()?.price;
    Some(records.iter().fold((first, first), |(lo, hi), r| {
        (if r.price < lo { r.price } else { lo }, if r.price > hi { r.price } else { hi })
    }))
}

pub fn max_volume(records: &[ChartRecord]) -> Option<Volume> {
    records.iter().map(|r| r.volume).reduce(|a, b| if b > a { b } else { a })
}
