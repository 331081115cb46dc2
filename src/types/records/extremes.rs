use serde::{Deserialize, Serialize};
use std::fmt;

/// Day-classification bucket produced by the extreme-temperature job.
///
/// The categories are mutually exclusive and together partition the full
/// day count of the analysis window. Which of them actually appear in a
/// response is up to the data source; consumers must not assume all five
/// are present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtremeCategory {
    /// Maximum temperature above 30°C.
    VeryHot,
    Hot,
    Normal,
    /// Minimum temperature below 15°C.
    Cool,
    /// Minimum temperature below 12°C.
    VeryCool,
    /// A category value this crate does not know about, kept verbatim so
    /// raw totals still include its day count.
    Unrecognized(String),
}

impl ExtremeCategory {
    /// Wire name of the category.
    pub fn as_str(&self) -> &str {
        match self {
            ExtremeCategory::VeryHot => "very_hot",
            ExtremeCategory::Hot => "hot",
            ExtremeCategory::Normal => "normal",
            ExtremeCategory::Cool => "cool",
            ExtremeCategory::VeryCool => "very_cool",
            ExtremeCategory::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ExtremeCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "very_hot" => ExtremeCategory::VeryHot,
            "hot" => ExtremeCategory::Hot,
            "normal" => ExtremeCategory::Normal,
            "cool" => ExtremeCategory::Cool,
            "very_cool" => ExtremeCategory::VeryCool,
            _ => ExtremeCategory::Unrecognized(raw),
        }
    }
}

impl From<ExtremeCategory> for String {
    fn from(category: ExtremeCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for ExtremeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day count and mean temperature for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeCategoryCount {
    pub category: ExtremeCategory,
    /// Number of days classified into this category.
    pub count: u64,
    /// Average temperature across those days (°C).
    pub avg_temp: f64,
}
