//! Summary-card values for the dashboard's top row.

use crate::present::format::{
    format_millimeters, format_temperature, format_trend, TrendDirection,
};
use crate::stats;
use crate::types::records::correlation::MonthlyCorrelation;
use crate::types::records::extremes::{ExtremeCategory, ExtremeCategoryCount};
use crate::types::records::monthly::MonthlyAverage;

/// Formatted values for the dashboard's summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateOverview {
    /// Mean of the monthly maxima, e.g. `"28.5°C"`.
    pub average_temperature: String,
    /// Mean of the monthly minima, e.g. `"17.2°C"`.
    pub average_minimum: String,
    /// Signed first-to-last-year delta, e.g. `"+1.3°C"`.
    pub warming_trend: String,
    pub trend_direction: TrendDirection,
    /// Window-wide precipitation total, e.g. `"3841 mm"`.
    pub total_precipitation: String,
    /// Days classified very hot; zero when the category is absent.
    pub very_hot_days: u64,
}

/// Assembles the overview cards from the three record arrays.
///
/// Only invoked once every array has been fetched; the engine does the
/// arithmetic and this function does the wording.
pub fn climate_overview(
    monthly: &[MonthlyAverage],
    extremes: &[ExtremeCategoryCount],
    correlation: &[MonthlyCorrelation],
) -> ClimateOverview {
    let summary = stats::overall_average(monthly);
    let trend = stats::warming_trend(monthly);
    ClimateOverview {
        average_temperature: format_temperature(summary.avg_max),
        average_minimum: format_temperature(summary.avg_min),
        warming_trend: format_trend(trend),
        trend_direction: TrendDirection::from_delta(trend),
        total_precipitation: format_millimeters(stats::total_precipitation(correlation)),
        very_hot_days: stats::category_count(extremes, &ExtremeCategory::VeryHot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_from_small_window() {
        let monthly = [
            MonthlyAverage {
                month: "2022-01".to_string(),
                avg_max: 28.0,
                avg_min: 17.0,
            },
            MonthlyAverage {
                month: "2022-02".to_string(),
                avg_max: 29.0,
                avg_min: 16.0,
            },
        ];
        let extremes = [ExtremeCategoryCount {
            category: ExtremeCategory::VeryHot,
            count: 23,
            avg_temp: 31.2,
        }];
        let correlation = [MonthlyCorrelation {
            month: "2022-01".to_string(),
            correlation: -0.62,
            avg_temp: 23.5,
            avg_precip: 12.8,
            rainy_days: 18,
            total_precip: 384.5,
        }];

        let overview = climate_overview(&monthly, &extremes, &correlation);
        assert_eq!(overview.average_temperature, "28.5°C");
        assert_eq!(overview.average_minimum, "16.5°C");
        // Two records: the 12-month windows fully overlap.
        assert_eq!(overview.warming_trend, "+0.0°C");
        assert_eq!(overview.trend_direction, TrendDirection::Flat);
        assert_eq!(overview.total_precipitation, "385 mm");
        assert_eq!(overview.very_hot_days, 23);
    }

    #[test]
    fn overview_degrades_to_defaults_on_empty_arrays() {
        let overview = climate_overview(&[], &[], &[]);
        assert_eq!(overview.average_temperature, "0.0°C");
        assert_eq!(overview.warming_trend, "+0.0°C");
        assert_eq!(overview.total_precipitation, "0 mm");
        assert_eq!(overview.very_hot_days, 0);
    }
}
