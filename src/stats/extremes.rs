//! Day-count aggregation over extreme-temperature categories.

use crate::types::records::extremes::{ExtremeCategory, ExtremeCategoryCount};

/// Per-category slice of the day-count partition.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: ExtremeCategory,
    pub count: u64,
    /// Share of all classified days, in percent, full precision.
    pub percentage: f64,
    pub avg_temp: f64,
}

/// Day-count total and per-category shares for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// Total classified days across every category present, including
    /// values this crate does not recognize.
    pub total_days: u64,
    pub shares: Vec<CategoryShare>,
}

/// Computes the total day count once, then each category's percentage
/// share of it.
///
/// A zero total yields a zero share for every category rather than a
/// division failure, so the UI never sees a NaN.
pub fn category_breakdown(counts: &[ExtremeCategoryCount]) -> CategoryBreakdown {
    let total_days: u64 = counts.iter().map(|c| c.count).sum();
    let shares = counts
        .iter()
        .map(|c| CategoryShare {
            category: c.category.clone(),
            count: c.count,
            percentage: if total_days == 0 {
                0.0
            } else {
                c.count as f64 / total_days as f64 * 100.0
            },
            avg_temp: c.avg_temp,
        })
        .collect();
    CategoryBreakdown { total_days, shares }
}

/// Day count for one category, zero when the data source did not report
/// it.
pub fn category_count(counts: &[ExtremeCategoryCount], category: &ExtremeCategory) -> u64 {
    counts
        .iter()
        .find(|c| &c.category == category)
        .map(|c| c.count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(category: ExtremeCategory, count: u64, avg_temp: f64) -> ExtremeCategoryCount {
        ExtremeCategoryCount {
            category,
            count,
            avg_temp,
        }
    }

    fn medellin_counts() -> Vec<ExtremeCategoryCount> {
        vec![
            counted(ExtremeCategory::VeryHot, 23, 31.2),
            counted(ExtremeCategory::Normal, 700, 22.0),
            counted(ExtremeCategory::Cool, 373, 13.5),
        ]
    }

    #[test]
    fn breakdown_totals_and_shares() {
        let breakdown = category_breakdown(&medellin_counts());
        assert_eq!(breakdown.total_days, 1096);

        let rounded: Vec<f64> = breakdown
            .shares
            .iter()
            .map(|s| (s.percentage * 10.0).round() / 10.0)
            .collect();
        assert_eq!(rounded, vec![2.1, 63.9, 34.0]);
    }

    #[test]
    fn shares_sum_to_one_hundred_percent() {
        let breakdown = category_breakdown(&medellin_counts());
        let sum: f64 = breakdown.shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let counts = [
            counted(ExtremeCategory::VeryHot, 0, 0.0),
            counted(ExtremeCategory::Cool, 0, 0.0),
        ];
        let breakdown = category_breakdown(&counts);
        assert_eq!(breakdown.total_days, 0);
        assert!(breakdown.shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn unrecognized_categories_count_toward_total() {
        let counts = [
            counted(ExtremeCategory::Normal, 90, 22.0),
            counted(ExtremeCategory::Unrecognized("scorching".to_string()), 10, 35.0),
        ];
        let breakdown = category_breakdown(&counts);
        assert_eq!(breakdown.total_days, 100);
        assert_eq!(breakdown.shares[1].percentage, 10.0);
    }

    #[test]
    fn category_count_defaults_to_zero_when_absent() {
        let counts = medellin_counts();
        assert_eq!(category_count(&counts, &ExtremeCategory::VeryHot), 23);
        assert_eq!(category_count(&counts, &ExtremeCategory::VeryCool), 0);
    }
}
