//! The presentation adapter: maps engine output and raw records into
//! chart-ready series and fixed-decimal display strings. No numeric
//! computation happens here beyond rounding for display.

mod category_meta;
mod format;
mod overview;
mod series;

pub use category_meta::{category_meta, interpret_correlation, CategoryMeta, CorrelationStrength};
pub use format::{
    format_correlation, format_millimeters, format_percentage, format_temperature, format_trend,
    month_label, month_tick, round_to, TrendDirection,
};
pub use overview::{climate_overview, ClimateOverview};
pub use series::{
    category_slices, correlation_scatter, monthly_table_rows, precipitation_series,
    temperature_series, CategorySlice, MonthlyRow, PrecipitationSeries, ScatterPoint,
    TemperatureSeries,
};
