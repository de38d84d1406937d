use crypto_dashboard_wasm::domain::market_data::{ChartRecord, Price, Timestamp, Volume};
use crypto_dashboard_wasm::infrastructure::rendering::{
    ChartLayout, MIN_TICK_GAP_PX, approx_label_width, date_ticks, price_line, volume_bars,
};

fn records(values: &[(f64, f64)]) -> Vec<ChartRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, &(price, volume))| {
            ChartRecord::new(
                format!("3/{}/2024", i + 1),
                Timestamp::from_millis(1_709_251_200_000 + i as u64 * 86_400_000),
                Price::new(price),
                Volume::new(volume),
            )
        })
        .collect()
}

#[test]
fn empty_records_draw_nothing() {
    let layout = ChartLayout::new(600.0, 300.0);
    assert!(price_line(&[], &layout, "$").is_empty());
    assert!(volume_bars(&[], &layout, "$").is_empty());
}

#[test]
fn price_line_tracks_values() {
    let layout = ChartLayout::new(600.0, 300.0);
    let data = records(&[(100.0, 1.0), (150.0, 1.0), (120.0, 1.0)]);
    let geometry = price_line(&data, &layout, "$");

    assert_eq!(geometry.points.len(), 3);
    assert!(geometry.bars.is_empty());
    assert!(geometry.points.windows(2).all(|w| w[0].x < w[1].x));
    // canvas y grows downward
    assert!(geometry.points[1].y < geometry.points[2].y);
    assert!(geometry.points[2].y < geometry.points[0].y);
    for p in &geometry.points {
        assert!(p.y >= layout.plot_top() && p.y <= layout.plot_bottom());
    }
}

#[test]
fn value_ticks_carry_currency_symbol() {
    let layout = ChartLayout::new(600.0, 300.0);
    let data = records(&[(60_000.0, 2.0e10), (70_000.0, 3.0e10)]);

    let price = price_line(&data, &layout, "€");
    assert!(price.value_ticks.iter().all(|t| t.label.starts_with('€')));
    assert!(price.value_ticks.iter().any(|t| t.label.ends_with('K')));

    let volume = volume_bars(&data, &layout, "₹");
    assert_eq!(volume.value_ticks[0].label, "₹0");
    assert!(volume.value_ticks.iter().any(|t| t.label.ends_with('B')));
}

#[test]
fn volume_bars_share_a_baseline() {
    let layout = ChartLayout::new(600.0, 300.0);
    let data = records(&[(1.0, 10.0), (1.0, 40.0), (1.0, 0.0), (1.0, 25.0)]);
    let geometry = volume_bars(&data, &layout, "$");

    assert_eq!(geometry.bars.len(), 4);
    let baseline = geometry.bars[0].y + geometry.bars[0].height;
    for bar in &geometry.bars {
        assert!((bar.y + bar.height - baseline).abs() < 1e-9);
        assert!(bar.width > 0.0 && bar.width < layout.band_width(4));
    }
    let tallest = geometry
        .bars
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.height.total_cmp(&b.1.height))
        .map(|(i, _)| i);
    assert_eq!(tallest, Some(1));
    assert_eq!(geometry.bars[2].height, 0.0);
}

#[test]
fn date_labels_are_thinned_on_narrow_charts() {
    let layout = ChartLayout::new(400.0, 300.0);
    let data = records(&vec![(1.0, 1.0); 90]);
    let ticks = date_ticks(&data, &layout);

    assert!(ticks.len() < data.len());
    assert_eq!(ticks[0].label, data[0].date_label);
    for pair in ticks.windows(2) {
        let gap = (pair[1].position - approx_label_width(&pair[1].label) / 2.0)
            - (pair[0].position + approx_label_width(&pair[0].label) / 2.0);
        assert!(gap >= MIN_TICK_GAP_PX);
    }
}

#[test]
fn hover_maps_back_to_record() {
    let layout = ChartLayout::new(600.0, 300.0);
    let data = records(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let geometry = price_line(&data, &layout, "$");
    for (i, point) in geometry.points.iter().enumerate() {
        assert_eq!(layout.hit_index(point.x, data.len()), Some(i));
    }
}
