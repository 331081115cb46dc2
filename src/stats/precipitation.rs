//! Precipitation and correlation metrics derived from monthly
//! correlation records.

use crate::stats::extremum::scan_extremum;
use crate::types::records::correlation::MonthlyCorrelation;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Sum of `total_precip` across all months (mm), unrounded.
pub fn total_precipitation(months: &[MonthlyCorrelation]) -> f64 {
    months.iter().map(|m| m.total_precip).sum()
}

/// Mean correlation coefficient, or `None` when no months are available.
///
/// The naive mean is 0/0 on an empty slice; `None` keeps "no data"
/// distinguishable from a genuine zero correlation instead of leaking a
/// NaN into presentation.
pub fn average_correlation(months: &[MonthlyCorrelation]) -> Option<f64> {
    if months.is_empty() {
        return None;
    }
    Some(months.iter().map(|m| m.correlation).sum::<f64>() / months.len() as f64)
}

/// Month with the highest `total_precip`, or `None` for an empty slice.
///
/// Same scan as the temperature extrema: one left-to-right pass, first
/// occurrence wins ties.
pub fn wettest_month(months: &[MonthlyCorrelation]) -> Option<&MonthlyCorrelation> {
    scan_extremum(months, |m| OrderedFloat(m.total_precip), Ordering::Greater)
}

/// Month with the lowest `total_precip`, or `None` for an empty slice.
pub fn driest_month(months: &[MonthlyCorrelation]) -> Option<&MonthlyCorrelation> {
    scan_extremum(months, |m| OrderedFloat(m.total_precip), Ordering::Less)
}
