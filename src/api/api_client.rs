use crate::api::error::ApiError;
use crate::types::records::correlation::MonthlyCorrelation;
use crate::types::records::extremes::ExtremeCategoryCount;
use crate::types::records::monthly::MonthlyAverage;
use crate::types::records::statistics::{ClimateStatistics, HealthCheck};
use crate::types::result_set::ResultSet;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Transport boundary to the analytics service.
///
/// All fetches go through here; transport failures are converted into
/// [`ApiError`] values at this layer and never reach the statistics
/// engine.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, http: Client) -> ApiClient {
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Monthly temperature averages, chronologically ordered by the service.
    pub async fn monthly_averages(&self) -> Result<Vec<MonthlyAverage>, ApiError> {
        self.get_json("/monthly-avg").await
    }

    /// Extreme-temperature day counts, one row per category the service
    /// observed.
    pub async fn extreme_counts(&self) -> Result<Vec<ExtremeCategoryCount>, ApiError> {
        self.get_json("/extreme-temps").await
    }

    /// Monthly temperature/precipitation correlations, chronologically
    /// ordered by the service.
    pub async fn monthly_correlations(&self) -> Result<Vec<MonthlyCorrelation>, ApiError> {
        self.get_json("/temp-precipitation").await
    }

    /// Server-side scalar statistics summary.
    pub async fn statistics(&self) -> Result<ClimateStatistics, ApiError> {
        self.get_json("/stats").await
    }

    pub async fn health(&self) -> Result<HealthCheck, ApiError> {
        self.get_json("/health").await
    }

    /// Streams the raw CSV export for a result set into memory.
    ///
    /// The body is opaque to this crate; it is handed back byte-for-byte
    /// for the caller to save or forward.
    pub async fn download(&self, result_set: ResultSet) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint_url(&format!("/download/{}", result_set.path_segment()));
        info!("Downloading {} export from {}", result_set, url);

        let response = self.send(&url).await?;

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream
            .try_next()
            .await
            .map_err(|e| ApiError::Download(url.clone(), e))?
        {
            bytes.extend_from_slice(&chunk);
        }
        info!(
            "Downloaded {} bytes for the {} export",
            bytes.len(),
            result_set
        );
        Ok(bytes)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(path);
        info!("Requesting {}", url);
        let response = self.send(&url).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(url, e))
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.to_string(), e))?;

        match response.error_for_status() {
            Ok(resp) => Ok(resp),
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url.to_string(), e)
                })
            }
        }
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
