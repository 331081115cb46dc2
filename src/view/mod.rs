pub mod dashboard;
pub mod fetch_state;
