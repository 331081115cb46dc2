//! This module provides the main entry point for interacting with the
//! Weatheria analytics API. It exposes the per-record-kind clients and
//! the concurrent dashboard fetch, plus the scalar statistics summary
//! and the raw export download.

use crate::api::api_client::ApiClient;
use crate::clients::correlation_client::CorrelationClient;
use crate::clients::extremes_client::ExtremesClient;
use crate::clients::monthly_client::MonthlyClient;
use crate::error::WeatheriaError;
use crate::types::records::statistics::{ClimateStatistics, HealthCheck};
use crate::types::result_set::ResultSet;
use crate::view::dashboard::DashboardSnapshot;
use crate::view::fetch_state::FetchState;
use bon::bon;
use futures_util::future;
use log::warn;

/// Base URL the client falls back to, matching the analytics service's
/// development deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The main client for the Weatheria climate-analysis API.
///
/// The service serves precomputed, already-aggregated records for a
/// single city over a fixed multi-year window; this client fetches those
/// records and derives the dashboard's secondary metrics locally. All
/// engine computation is pure and synchronous; only the fetches are
/// async.
///
/// # Examples
///
/// ```no_run
/// # use weatheria::{Weatheria, WeatheriaError};
/// # async fn run() -> Result<(), WeatheriaError> {
/// // Default base URL
/// let client = Weatheria::builder().build();
///
/// // Or point it at a deployed instance, with transport policy (timeouts,
/// // proxies) configured on the reqwest client.
/// let client = Weatheria::builder()
///     .base_url("https://climate.example.com".to_string())
///     .http(reqwest::Client::new())
///     .build();
///
/// let stats = client.statistics().await?;
/// println!("{} months analyzed", stats.total_months_analyzed);
/// # Ok(())
/// # }
/// ```
pub struct Weatheria {
    api: ApiClient,
}

#[bon]
impl Weatheria {
    /// Creates a client via the builder.
    ///
    /// * `.base_url(String)`: Optional. Where the analytics service
    ///   lives. Defaults to [`DEFAULT_BASE_URL`]; a trailing slash is
    ///   tolerated.
    /// * `.http(reqwest::Client)`: Optional. A preconfigured transport,
    ///   for callers that need timeout, proxy, or TLS policy. Defaults
    ///   to a plain client; no timeout is imposed here.
    #[builder]
    pub fn new(base_url: Option<String>, http: Option<reqwest::Client>) -> Weatheria {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Weatheria {
            api: ApiClient::new(&base_url, http.unwrap_or_default()),
        }
    }
}

impl Weatheria {
    /// Client for the monthly temperature-average result set.
    pub fn monthly(&self) -> MonthlyClient<'_> {
        MonthlyClient::new(self)
    }

    /// Client for the extreme-temperature day-count result set.
    pub fn extremes(&self) -> ExtremesClient<'_> {
        ExtremesClient::new(self)
    }

    /// Client for the temperature/precipitation correlation result set.
    pub fn correlation(&self) -> CorrelationClient<'_> {
        CorrelationClient::new(self)
    }

    /// Fetches the server-side scalar statistics summary.
    pub async fn statistics(&self) -> Result<ClimateStatistics, WeatheriaError> {
        Ok(self.api.statistics().await?)
    }

    /// Checks service liveness.
    pub async fn health(&self) -> Result<HealthCheck, WeatheriaError> {
        Ok(self.api.health().await?)
    }

    /// Downloads the raw CSV export for a result set as opaque bytes.
    ///
    /// The payload is passed through byte-for-byte and never parsed;
    /// [`ResultSet::file_name`] gives a suggested name for saving it.
    pub async fn download(&self, result_set: ResultSet) -> Result<Vec<u8>, WeatheriaError> {
        Ok(self.api.download(result_set).await?)
    }

    /// Fetches the three dashboard record arrays concurrently and
    /// returns the settled snapshot.
    ///
    /// The fetches are independent: a failure in one degrades only its
    /// own section and is reported locally, while the others still carry
    /// their data. This method itself never fails; inspect
    /// [`DashboardSnapshot::ready`] and
    /// [`DashboardSnapshot::failed_sections`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use weatheria::{Weatheria, WeatheriaError};
    /// # async fn run() -> Result<(), WeatheriaError> {
    /// let client = Weatheria::builder().build();
    /// let snapshot = client.dashboard().await;
    ///
    /// if let Some(overview) = snapshot.overview() {
    ///     println!("average: {}", overview.average_temperature);
    ///     println!("trend:   {}", overview.warming_trend);
    /// } else {
    ///     for section in snapshot.failed_sections() {
    ///         eprintln!("section unavailable: {section}");
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn dashboard(&self) -> DashboardSnapshot {
        let (monthly, extremes, correlation) = future::join3(
            self.api.monthly_averages(),
            self.api.extreme_counts(),
            self.api.monthly_correlations(),
        )
        .await;

        let snapshot = DashboardSnapshot {
            monthly: FetchState::from_result(monthly),
            extremes: FetchState::from_result(extremes),
            correlation: FetchState::from_result(correlation),
        };
        for section in snapshot.failed_sections() {
            warn!("Dashboard section unavailable: {}", section);
        }
        snapshot
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}
