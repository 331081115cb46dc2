//! Fixed display metadata for the extreme-temperature categories and
//! the correlation-strength wording shown beside each month.

use crate::types::records::extremes::ExtremeCategory;

/// Display metadata for one temperature category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub description: &'static str,
    /// Hex color used consistently across category charts.
    pub color: &'static str,
}

/// Looks up display metadata for a category.
///
/// Returns `None` for values outside the fixed enum; category-keyed
/// displays skip those records, while raw totals still count them.
pub fn category_meta(category: &ExtremeCategory) -> Option<CategoryMeta> {
    match category {
        ExtremeCategory::VeryHot => Some(CategoryMeta {
            label: "Very Hot",
            description: "Maximum temperature above 30°C",
            color: "#ef4444",
        }),
        ExtremeCategory::Hot => Some(CategoryMeta {
            label: "Hot",
            description: "Maximum temperature near the very-hot threshold",
            color: "#f59e0b",
        }),
        ExtremeCategory::Normal => Some(CategoryMeta {
            label: "Normal",
            description: "Temperatures within the 15-30°C range",
            color: "#10b981",
        }),
        ExtremeCategory::Cool => Some(CategoryMeta {
            label: "Cool",
            description: "Minimum temperature below 15°C",
            color: "#3b82f6",
        }),
        ExtremeCategory::VeryCool => Some(CategoryMeta {
            label: "Very Cool",
            description: "Minimum temperature below 12°C",
            color: "#6366f1",
        }),
        ExtremeCategory::Unrecognized(_) => None,
    }
}

/// Strength bucket for a correlation coefficient's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl CorrelationStrength {
    pub fn of(correlation: f64) -> CorrelationStrength {
        let magnitude = correlation.abs();
        if magnitude >= 0.7 {
            CorrelationStrength::Strong
        } else if magnitude >= 0.4 {
            CorrelationStrength::Moderate
        } else if magnitude >= 0.2 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Moderate => "moderate",
            CorrelationStrength::Weak => "weak",
            CorrelationStrength::VeryWeak => "very weak",
        }
    }
}

/// Human wording for a coefficient, e.g. `"moderate negative"`.
pub fn interpret_correlation(correlation: f64) -> String {
    let direction = if correlation < 0.0 { "negative" } else { "positive" };
    format!("{} {}", CorrelationStrength::of(correlation).as_str(), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixed_category_has_metadata() {
        for category in [
            ExtremeCategory::VeryHot,
            ExtremeCategory::Hot,
            ExtremeCategory::Normal,
            ExtremeCategory::Cool,
            ExtremeCategory::VeryCool,
        ] {
            assert!(category_meta(&category).is_some());
        }
    }

    #[test]
    fn unrecognized_category_has_no_metadata() {
        let category = ExtremeCategory::Unrecognized("scorching".to_string());
        assert!(category_meta(&category).is_none());
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(CorrelationStrength::of(-0.82), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::of(0.7), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::of(-0.6234), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::of(0.2), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::of(0.05), CorrelationStrength::VeryWeak);
    }

    #[test]
    fn interpretation_includes_direction() {
        assert_eq!(interpret_correlation(-0.6234), "moderate negative");
        assert_eq!(interpret_correlation(0.75), "strong positive");
        assert_eq!(interpret_correlation(0.0), "very weak positive");
    }
}
