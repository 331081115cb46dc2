//! Client for the monthly temperature-average result set.
//!
//! Obtained via [`Weatheria::monthly`]. Besides the raw listing it
//! offers the derived lookups the dashboard shows, computed locally by
//! the statistics engine from the fetched array.

use crate::error::WeatheriaError;
use crate::stats::{coolest_month, hottest_month, overall_average, TemperatureSummary};
use crate::types::records::monthly::MonthlyAverage;
use crate::weatheria::Weatheria;

pub struct MonthlyClient<'a> {
    client: &'a Weatheria,
}

impl<'a> MonthlyClient<'a> {
    pub(crate) fn new(client: &'a Weatheria) -> Self {
        Self { client }
    }

    /// All monthly averages, chronologically ordered by the service.
    pub async fn list(&self) -> Result<Vec<MonthlyAverage>, WeatheriaError> {
        Ok(self.client.api().monthly_averages().await?)
    }

    /// The month with the highest average maximum, or `None` when the
    /// service returned no records.
    pub async fn hottest(&self) -> Result<Option<MonthlyAverage>, WeatheriaError> {
        let months = self.list().await?;
        Ok(hottest_month(&months).cloned())
    }

    /// The month with the lowest average minimum, or `None` when the
    /// service returned no records.
    pub async fn coolest(&self) -> Result<Option<MonthlyAverage>, WeatheriaError> {
        let months = self.list().await?;
        Ok(coolest_month(&months).cloned())
    }

    /// Mean maxima and minima across the whole analysis window.
    pub async fn overall_average(&self) -> Result<TemperatureSummary, WeatheriaError> {
        let months = self.list().await?;
        Ok(overall_average(&months))
    }
}
