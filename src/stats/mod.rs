//! The derived-statistics engine: pure, deterministic functions over
//! fetched record arrays.
//!
//! Nothing here performs I/O or mutates its input; every result is a
//! newly allocated value. Intermediate sums are kept at full precision,
//! with display rounding applied later by the presentation layer.

mod extremes;
mod extremum;
mod precipitation;
mod temperature;

pub use extremes::{category_breakdown, category_count, CategoryBreakdown, CategoryShare};
pub use precipitation::{average_correlation, driest_month, total_precipitation, wettest_month};
pub use temperature::{
    coolest_month, hottest_month, overall_average, warming_trend, TemperatureSummary,
};
