pub mod correlation_client;
pub mod extremes_client;
pub mod monthly_client;
