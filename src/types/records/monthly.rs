use serde::{Deserialize, Serialize};

/// One month of precomputed temperature averages, as served by the
/// analytics API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// Calendar month key in `YYYY-MM` form.
    pub month: String,
    /// Average of the daily maximum temperatures (°C).
    pub avg_max: f64,
    /// Average of the daily minimum temperatures (°C).
    pub avg_min: f64,
}

impl MonthlyAverage {
    /// Spread between the average maximum and minimum (°C).
    ///
    /// Records with `avg_max < avg_min` are passed through unvalidated,
    /// so the range can come out negative.
    pub fn range(&self) -> f64 {
        self.avg_max - self.avg_min
    }
}
