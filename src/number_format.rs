/// Compact notation units, ascending
const UNITS: [(f64, &str); 5] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// en-US compact notation with an optional currency symbol: `1234.5 → "$1.2K"`.
///
/// Two or more integer digits round to an integer, fewer keep two significant digits.
pub fn format_compact(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let mut unit = UNITS.iter().rposition(|(scale, _)| abs >= *scale).unwrap_or(0);
    let mut rounded = round_compact(abs / UNITS[unit].0);
    if rounded >= 1000.0 && unit + 1 < UNITS.len() {
        unit += 1;
        rounded = round_compact(abs / UNITS[unit].0);
    }

    format!("{sign}{symbol}{rounded}{}", UNITS[unit].1)
}

fn round_compact(x: f64) -> f64 {
    if x >= 10.0 {
        return x.round();
    }
    if x == 0.0 {
        return 0.0;
    }
    let decimals = 1 - x.log10().floor() as i32;
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Fixed decimals with thousands separators: `1234567.891 → "1,234,567.89"`
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
