//! Chart-ready series and table rows built from raw record arrays.
//!
//! Formatting only: values are copied, labeled, and rounded for display.
//! Anything that deserves the name "computation" lives in [`crate::stats`].

use crate::present::category_meta::category_meta;
use crate::present::format::{month_tick, round_to};
use crate::types::records::correlation::MonthlyCorrelation;
use crate::types::records::extremes::ExtremeCategoryCount;
use crate::types::records::monthly::MonthlyAverage;

/// Line-chart series of monthly maximum/minimum temperatures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureSeries {
    /// Short month ticks, one per record.
    pub labels: Vec<String>,
    pub avg_max: Vec<f64>,
    pub avg_min: Vec<f64>,
}

pub fn temperature_series(months: &[MonthlyAverage]) -> TemperatureSeries {
    TemperatureSeries {
        labels: months.iter().map(|m| month_tick(&m.month).to_string()).collect(),
        avg_max: months.iter().map(|m| m.avg_max).collect(),
        avg_min: months.iter().map(|m| m.avg_min).collect(),
    }
}

/// Bar-chart series of monthly precipitation totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrecipitationSeries {
    pub labels: Vec<String>,
    pub total_precip: Vec<f64>,
    pub rainy_days: Vec<u32>,
}

pub fn precipitation_series(months: &[MonthlyCorrelation]) -> PrecipitationSeries {
    PrecipitationSeries {
        labels: months.iter().map(|m| month_tick(&m.month).to_string()).collect(),
        total_precip: months.iter().map(|m| m.total_precip).collect(),
        rainy_days: months.iter().map(|m| m.rainy_days).collect(),
    }
}

/// One temperature/precipitation scatter point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub avg_temp: f64,
    pub total_precip: f64,
}

pub fn correlation_scatter(months: &[MonthlyCorrelation]) -> Vec<ScatterPoint> {
    months
        .iter()
        .map(|m| ScatterPoint {
            avg_temp: m.avg_temp,
            total_precip: m.total_precip,
        })
        .collect()
}

/// Pie-chart slice for one category's day count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub label: &'static str,
    pub color: &'static str,
    pub count: u64,
}

/// Slices for the category distribution chart.
///
/// Unrecognized categories are skipped here; the engine's raw totals
/// still include their day counts.
pub fn category_slices(counts: &[ExtremeCategoryCount]) -> Vec<CategorySlice> {
    counts
        .iter()
        .filter_map(|c| {
            category_meta(&c.category).map(|meta| CategorySlice {
                label: meta.label,
                color: meta.color,
                count: c.count,
            })
        })
        .collect()
}

/// Row of the monthly temperature table, rounded to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub month: String,
    pub avg_max: f64,
    pub avg_min: f64,
    /// `avg_max − avg_min`; negative for physically inverted records,
    /// which are passed through unvalidated.
    pub range: f64,
}

pub fn monthly_table_rows(months: &[MonthlyAverage]) -> Vec<MonthlyRow> {
    months
        .iter()
        .map(|m| MonthlyRow {
            month: m.month.clone(),
            avg_max: round_to(m.avg_max, 2),
            avg_min: round_to(m.avg_min, 2),
            range: round_to(m.range(), 2),
        })
        .collect()
}
