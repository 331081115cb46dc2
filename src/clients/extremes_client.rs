//! Client for the extreme-temperature day-count result set.

use crate::error::WeatheriaError;
use crate::stats::{category_breakdown, CategoryBreakdown};
use crate::types::records::extremes::ExtremeCategoryCount;
use crate::weatheria::Weatheria;

/// Obtained via [`Weatheria::extremes`].
pub struct ExtremesClient<'a> {
    client: &'a Weatheria,
}

impl<'a> ExtremesClient<'a> {
    pub(crate) fn new(client: &'a Weatheria) -> Self {
        Self { client }
    }

    /// Day counts per category, one row per category the service
    /// observed. There is no guarantee all five known categories appear.
    pub async fn list(&self) -> Result<Vec<ExtremeCategoryCount>, WeatheriaError> {
        Ok(self.client.api().extreme_counts().await?)
    }

    /// Total day count plus each category's percentage share, computed
    /// locally from the fetched counts.
    pub async fn summary(&self) -> Result<CategoryBreakdown, WeatheriaError> {
        let counts = self.list().await?;
        Ok(category_breakdown(&counts))
    }
}
