//! Display formatting for engine output.
//!
//! All fixed-decimal strings go through [`round_to`]; the engine hands
//! over full-precision values and never rounds early.

use chrono::NaiveDate;

/// Rounds half away from zero at `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Temperature at one decimal place, e.g. `"28.5°C"`.
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}°C", round_to(celsius, 1))
}

/// Signed trend delta at one decimal place, e.g. `"+1.3°C"`.
pub fn format_trend(delta: f64) -> String {
    format!("{:+.1}°C", round_to(delta, 1))
}

/// Precipitation total at zero decimal places, e.g. `"384 mm"`.
pub fn format_millimeters(millimeters: f64) -> String {
    format!("{:.0} mm", round_to(millimeters, 0))
}

/// Correlation coefficient at three decimal places, e.g. `"-0.623"`,
/// or an explicit marker when the engine had no months to average over.
pub fn format_correlation(correlation: Option<f64>) -> String {
    match correlation {
        Some(r) => format!("{:.3}", round_to(r, 3)),
        None => "insufficient data".to_string(),
    }
}

/// Category share at one decimal place, e.g. `"63.9%"`.
pub fn format_percentage(percent: f64) -> String {
    format!("{:.1}%", round_to(percent, 1))
}

/// Reading of the warming-trend sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Warming,
    Cooling,
    Flat,
}

impl TrendDirection {
    /// Classifies a trend delta after display rounding, so a delta that
    /// rounds to 0.0 reads as flat rather than as spurious warming.
    pub fn from_delta(delta: f64) -> TrendDirection {
        let rounded = round_to(delta, 1);
        if rounded > 0.0 {
            TrendDirection::Warming
        } else if rounded < 0.0 {
            TrendDirection::Cooling
        } else {
            TrendDirection::Flat
        }
    }
}

/// Short chart tick for a `YYYY-MM` key: the `MM` part.
pub fn month_tick(month: &str) -> &str {
    month.get(5..).unwrap_or(month)
}

/// Calendar-aware label for a `YYYY-MM` key, e.g. `"Jan 2022"`.
///
/// Falls back to the raw key when it does not parse as a month.
pub fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}
