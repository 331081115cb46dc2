mod api;
mod clients;
mod error;
mod present;
mod stats;
mod types;
mod view;
mod weatheria;

pub use error::WeatheriaError;
pub use weatheria::*;

pub use clients::correlation_client::*;
pub use clients::extremes_client::*;
pub use clients::monthly_client::*;

pub use types::records::correlation::MonthlyCorrelation;
pub use types::records::extremes::{ExtremeCategory, ExtremeCategoryCount};
pub use types::records::monthly::MonthlyAverage;
pub use types::records::statistics::{ClimateStatistics, HealthCheck};
pub use types::result_set::ResultSet;

pub use api::error::ApiError;

pub use present::*;
pub use stats::*;

pub use view::dashboard::DashboardSnapshot;
pub use view::fetch_state::FetchState;
