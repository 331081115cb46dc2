//! Identifiers for the raw result exports served by the analytics API.

use std::fmt;

/// Names one of the three known result sets available for raw download.
///
/// Used with [`crate::Weatheria::download`] to fetch the underlying CSV
/// export as an opaque byte stream. The export is never parsed by this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSet {
    /// Monthly average maximum/minimum temperatures.
    MonthlyAverages,
    /// Extreme-temperature day classification counts.
    ExtremeTemperatures,
    /// Monthly temperature/precipitation correlations.
    TemperaturePrecipitation,
}

impl ResultSet {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            ResultSet::MonthlyAverages => "monthly-avg",
            ResultSet::ExtremeTemperatures => "extreme-temps",
            ResultSet::TemperaturePrecipitation => "temp-precipitation",
        }
    }

    /// Suggested filename for saving the export locally, matching what
    /// the service itself attaches to the response.
    pub fn file_name(&self) -> &'static str {
        match self {
            ResultSet::MonthlyAverages => "monthly_avg_results.csv",
            ResultSet::ExtremeTemperatures => "extreme_temps_results.csv",
            ResultSet::TemperaturePrecipitation => "temp_precip_results.csv",
        }
    }
}

/// Formats a `ResultSet` using its URL path segment.
///
/// # Examples
///
/// ```
/// use weatheria::ResultSet;
///
/// assert_eq!(ResultSet::MonthlyAverages.to_string(), "monthly-avg");
/// assert_eq!(format!("{}", ResultSet::ExtremeTemperatures), "extreme-temps");
/// ```
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
