//! Temperature metrics derived from monthly average records.

use crate::stats::extremum::scan_extremum;
use crate::types::records::monthly::MonthlyAverage;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Window length used by [`warming_trend`]: one calendar year of records.
const TREND_WINDOW: usize = 12;

/// Arithmetic means of `avg_max` and `avg_min` over a set of months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    pub avg_max: f64,
    pub avg_min: f64,
}

/// Mean `avg_max` and `avg_min` across `months`.
///
/// An empty slice yields zeroes so callers always have a displayable
/// value. Accumulation is full precision; rounding to display precision
/// is the presentation layer's job.
pub fn overall_average(months: &[MonthlyAverage]) -> TemperatureSummary {
    if months.is_empty() {
        return TemperatureSummary {
            avg_max: 0.0,
            avg_min: 0.0,
        };
    }
    let n = months.len() as f64;
    TemperatureSummary {
        avg_max: months.iter().map(|m| m.avg_max).sum::<f64>() / n,
        avg_min: months.iter().map(|m| m.avg_min).sum::<f64>() / n,
    }
}

/// Signed change in mean `avg_max` between the first and last twelve
/// records of a chronologically ordered slice.
///
/// With fewer than 24 records the two windows overlap; that is accepted,
/// not guarded against. An empty window contributes a mean of zero. A
/// positive delta reads as warming and a negative one as cooling, but
/// interpreting the sign is left to presentation.
pub fn warming_trend(months: &[MonthlyAverage]) -> f64 {
    let first = &months[..months.len().min(TREND_WINDOW)];
    let last = &months[months.len().saturating_sub(TREND_WINDOW)..];
    window_mean(last) - window_mean(first)
}

fn window_mean(window: &[MonthlyAverage]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|m| m.avg_max).sum::<f64>() / window.len() as f64
}

/// Month with the highest `avg_max`, or `None` for an empty slice.
///
/// Single left-to-right scan; the first record carrying the extreme
/// value wins ties.
pub fn hottest_month(months: &[MonthlyAverage]) -> Option<&MonthlyAverage> {
    scan_extremum(months, |m| OrderedFloat(m.avg_max), Ordering::Greater)
}

/// Month with the lowest `avg_min`, or `None` for an empty slice.
pub fn coolest_month(months: &[MonthlyAverage]) -> Option<&MonthlyAverage> {
    scan_extremum(months, |m| OrderedFloat(m.avg_min), Ordering::Less)
}
