use serde::{Deserialize, Serialize};

/// Monthly temperature/precipitation correlation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCorrelation {
    /// Calendar month key in `YYYY-MM` form.
    pub month: String,
    /// Pearson correlation coefficient, assumed to lie in [-1, 1] but
    /// not clamped here.
    pub correlation: f64,
    /// Average temperature for the month (°C).
    pub avg_temp: f64,
    /// Average daily precipitation (mm).
    pub avg_precip: f64,
    /// Days with measurable precipitation.
    pub rainy_days: u32,
    /// Total precipitation over the month (mm).
    pub total_precip: f64,
}
