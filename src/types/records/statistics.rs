use serde::{Deserialize, Serialize};

/// Aggregate totals and extremes precomputed server-side for the whole
/// analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateStatistics {
    pub total_months_analyzed: u32,
    /// Highest monthly average maximum in the window (°C).
    pub max_temperature: f64,
    /// Lowest monthly average minimum in the window (°C).
    pub min_temperature: f64,
    pub overall_avg_max: f64,
    pub overall_avg_min: f64,
}

/// Service liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_statistics() {
        let stats: ClimateStatistics = serde_json::from_str(
            r#"{
                "total_months_analyzed": 36,
                "max_temperature": 32.5,
                "min_temperature": 14.2,
                "overall_avg_max": 28.7,
                "overall_avg_min": 17.8
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_months_analyzed, 36);
        assert_eq!(stats.max_temperature, 32.5);
    }

    #[test]
    fn deserializes_health_check() {
        let health: HealthCheck =
            serde_json::from_str(r#"{"status": "healthy", "version": "1.0.0"}"#).unwrap();
        assert_eq!(health.status, "healthy");
    }
}
