//! Client for the temperature/precipitation correlation result set.

use crate::error::WeatheriaError;
use crate::stats::{
    average_correlation, driest_month, total_precipitation, wettest_month,
};
use crate::types::records::correlation::MonthlyCorrelation;
use crate::weatheria::Weatheria;

/// Obtained via [`Weatheria::correlation`].
pub struct CorrelationClient<'a> {
    client: &'a Weatheria,
}

impl<'a> CorrelationClient<'a> {
    pub(crate) fn new(client: &'a Weatheria) -> Self {
        Self { client }
    }

    /// Monthly correlation rows, chronologically ordered by the service.
    pub async fn list(&self) -> Result<Vec<MonthlyCorrelation>, WeatheriaError> {
        Ok(self.client.api().monthly_correlations().await?)
    }

    /// The month with the most precipitation, or `None` when the service
    /// returned no records.
    pub async fn wettest(&self) -> Result<Option<MonthlyCorrelation>, WeatheriaError> {
        let months = self.list().await?;
        Ok(wettest_month(&months).cloned())
    }

    /// The month with the least precipitation, or `None` when the
    /// service returned no records.
    pub async fn driest(&self) -> Result<Option<MonthlyCorrelation>, WeatheriaError> {
        let months = self.list().await?;
        Ok(driest_month(&months).cloned())
    }

    /// Mean correlation coefficient, `None` when no months are
    /// available.
    pub async fn average_correlation(&self) -> Result<Option<f64>, WeatheriaError> {
        let months = self.list().await?;
        Ok(average_correlation(&months))
    }

    /// Precipitation total across the whole analysis window (mm).
    pub async fn total_precipitation(&self) -> Result<f64, WeatheriaError> {
        let months = self.list().await?;
        Ok(total_precipitation(&months))
    }
}
