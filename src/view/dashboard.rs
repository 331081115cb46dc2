//! Snapshot of the dashboard view's three concurrent fetches.

use crate::present::{climate_overview, ClimateOverview};
use crate::types::records::correlation::MonthlyCorrelation;
use crate::types::records::extremes::ExtremeCategoryCount;
use crate::types::records::monthly::MonthlyAverage;
use crate::view::fetch_state::FetchState;

/// Result of one round of dashboard fetches.
///
/// The three record arrays are requested concurrently and each settles
/// on its own. A failed fetch leaves its section unavailable without
/// hiding the others, and the loading state resolves either way.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub monthly: FetchState<Vec<MonthlyAverage>>,
    pub extremes: FetchState<Vec<ExtremeCategoryCount>>,
    pub correlation: FetchState<Vec<MonthlyCorrelation>>,
}

impl DashboardSnapshot {
    /// True once every fetch has settled, successfully or not.
    pub fn all_settled(&self) -> bool {
        self.monthly.is_settled() && self.extremes.is_settled() && self.correlation.is_settled()
    }

    /// True when every fetch succeeded and data-dependent sections can
    /// render.
    pub fn ready(&self) -> bool {
        self.monthly.value().is_some()
            && self.extremes.value().is_some()
            && self.correlation.value().is_some()
    }

    /// Names of the sections whose fetch failed, for local error
    /// reporting.
    pub fn failed_sections(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.monthly.is_failed() {
            failed.push("monthly averages");
        }
        if self.extremes.is_failed() {
            failed.push("extreme temperatures");
        }
        if self.correlation.is_failed() {
            failed.push("temperature-precipitation correlation");
        }
        failed
    }

    /// Overview-card values, available only when every input array is
    /// present. The engine never runs against a partial snapshot.
    pub fn overview(&self) -> Option<ClimateOverview> {
        Some(climate_overview(
            self.monthly.value()?,
            self.extremes.value()?,
            self.correlation.value()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_is_neither_settled_nor_ready() {
        let snapshot = DashboardSnapshot::default();
        assert!(!snapshot.all_settled());
        assert!(!snapshot.ready());
        assert!(snapshot.overview().is_none());
    }

    #[test]
    fn partial_failure_settles_without_becoming_ready() {
        let snapshot = DashboardSnapshot {
            monthly: FetchState::Succeeded(Vec::new()),
            extremes: FetchState::Failed("503 Service Unavailable".to_string()),
            correlation: FetchState::Succeeded(Vec::new()),
        };
        assert!(snapshot.all_settled());
        assert!(!snapshot.ready());
        assert_eq!(snapshot.failed_sections(), vec!["extreme temperatures"]);
        assert!(snapshot.overview().is_none());
    }

    #[test]
    fn fully_succeeded_snapshot_renders_an_overview() {
        let snapshot = DashboardSnapshot {
            monthly: FetchState::Succeeded(Vec::new()),
            extremes: FetchState::Succeeded(Vec::new()),
            correlation: FetchState::Succeeded(Vec::new()),
        };
        assert!(snapshot.ready());
        assert!(snapshot.failed_sections().is_empty());

        // Empty arrays still produce defined card values.
        let overview = snapshot.overview().unwrap();
        assert_eq!(overview.very_hot_days, 0);
    }

    #[test]
    fn in_flight_fetch_keeps_loading_state_open() {
        let snapshot = DashboardSnapshot {
            monthly: FetchState::InFlight,
            extremes: FetchState::Succeeded(Vec::new()),
            correlation: FetchState::Succeeded(Vec::new()),
        };
        assert!(!snapshot.all_settled());
        assert!(!snapshot.ready());
    }
}
