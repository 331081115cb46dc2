pub mod correlation;
pub mod extremes;
pub mod monthly;
pub mod statistics;
