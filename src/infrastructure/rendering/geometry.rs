//! Pure chart geometry in canvas pixels. No browser calls, so everything here is unit-testable.

use crate::domain::market_data::{ChartRecord, max_volume, price_range};
use crate::number_format::format_compact;

/// Minimum horizontal gap between date labels
pub const MIN_TICK_GAP_PX: f64 = 32.0;
/// Rough glyph advance of the 12px axis font
pub const CHAR_WIDTH_PX: f64 = 7.0;
/// Horizontal ticks on the value axis
pub const VALUE_TICKS: usize = 5;
/// Share of a band occupied by a volume bar
pub const BAR_FILL_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_left: 64.0,
            padding_right: 12.0,
            padding_top: 10.0,
            padding_bottom: 28.0,
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding_left
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.padding_right).max(self.padding_left)
    }

    pub fn plot_top(&self) -> f64 {
        self.padding_top
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.padding_bottom).max(self.padding_top)
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// Width of one record's slot
    pub fn band_width(&self, count: usize) -> f64 {
        if count == 0 { 0.0 } else { self.plot_width() / count as f64 }
    }

    /// Horizontal center of the slot at `index`
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.plot_left() + (index as f64 + 0.5) * self.band_width(count)
    }

    /// Record index under a canvas x coordinate
    pub fn hit_index(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.plot_left() || x > self.plot_right() {
            return None;
        }
        let index = ((x - self.plot_left()) / self.band_width(count)).floor() as usize;
        Some(index.min(count - 1))
    }
}

/// Linear value → y mapping over `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Scale whose bounds are rounded outward to "nice" tick values
    pub fn nice(min: f64, max: f64) -> Self {
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
            (min - pad, max + pad)
        } else {
            (min, max)
        };
        let step = nice_step((max - min) / (VALUE_TICKS - 1) as f64);
        Self { min: (min / step).floor() * step, max: (max / step).ceil() * step }
    }

    pub fn y_for(&self, value: f64, layout: &ChartLayout) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        layout.plot_bottom() - ratio * layout.plot_height()
    }

    pub fn ticks(&self) -> Vec<f64> {
        let step = (self.max - self.min) / (VALUE_TICKS - 1) as f64;
        (0..VALUE_TICKS).map(|i| self.min + step * i as f64).collect()
    }
}

/// 1, 2 or 5 times a power of ten, at least `raw`
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// x for date ticks, y for value ticks
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to paint one chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartGeometry {
    pub points: Vec<Point>,
    pub bars: Vec<BarRect>,
    pub value_ticks: Vec<AxisTick>,
    pub date_ticks: Vec<AxisTick>,
}

impl ChartGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.bars.is_empty()
    }
}

/// Price line: one point per record at its band center
pub fn price_line(records: &[ChartRecord], layout: &ChartLayout, symbol: &str) -> ChartGeometry {
    let Some((lo, hi)) = price_range(records) else {
        return ChartGeometry::default();
    };
    let scale = ValueScale::nice(lo.value(), hi.value());
    let count = records.len();

    ChartGeometry {
        points: records
            .iter()
            .enumerate()
            .map(|(i, r)| Point { x: layout.band_center(i, count), y: scale.y_for(r.price.value(), layout) })
            .collect(),
        bars: Vec::new(),
        value_ticks: value_ticks(&scale, layout, symbol),
        date_ticks: date_ticks(records, layout),
    }
}

/// Volume bars grow from zero
pub fn volume_bars(records: &[ChartRecord], layout: &ChartLayout, symbol: &str) -> ChartGeometry {
    let Some(top) = max_volume(records) else {
        return ChartGeometry::default();
    };
    let scale = ValueScale::nice(0.0, top.value().max(0.0));
    let count = records.len();
    let width = layout.band_width(count) * BAR_FILL_RATIO;
    let baseline = scale.y_for(0.0, layout);

    ChartGeometry {
        points: Vec::new(),
        bars: records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let y = scale.y_for(r.volume.value().max(0.0), layout);
                BarRect { x: layout.band_center(i, count) - width / 2.0, y, width, height: baseline - y }
            })
            .collect(),
        value_ticks: value_ticks(&scale, layout, symbol),
        date_ticks: date_ticks(records, layout),
    }
}

fn value_ticks(scale: &ValueScale, layout: &ChartLayout, symbol: &str) -> Vec<AxisTick> {
    scale
        .ticks()
        .into_iter()
        .map(|v| AxisTick { position: scale.y_for(v, layout), label: format_compact(v, symbol) })
        .collect()
}

/// Date labels thinned so neighbours keep `MIN_TICK_GAP_PX` between them
pub fn date_ticks(records: &[ChartRecord], layout: &ChartLayout) -> Vec<AxisTick> {
    let count = records.len();
    let mut ticks: Vec<AxisTick> = Vec::new();
    let mut last_end = f64::NEG_INFINITY;

    for (i, record) in records.iter().enumerate() {
        let x = layout.band_center(i, count);
        let half = approx_label_width(&record.date_label) / 2.0;
        if x - half >= last_end + MIN_TICK_GAP_PX || ticks.is_empty() {
            last_end = x + half;
            ticks.push(AxisTick { position: x, label: record.date_label.clone() });
        }
    }
    ticks
}

pub fn approx_label_width(label: &str) -> f64 {
    label.chars().count() as f64 * CHAR_WIDTH_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_rounds_up() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(32.0), 50.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn flat_series_gets_a_visible_range() {
        let scale = ValueScale::nice(100.0, 100.0);
        assert!(scale.min < 100.0 && scale.max > 100.0);
    }

    #[test]
    fn hit_index_clamps_to_plot() {
        let layout = ChartLayout::new(400.0, 300.0);
        assert_eq!(layout.hit_index(10.0, 4), None);
        assert_eq!(layout.hit_index(layout.plot_left(), 4), Some(0));
        assert_eq!(layout.hit_index(layout.plot_right(), 4), Some(3));
        assert_eq!(layout.hit_index(200.0, 0), None);
    }
}
