use crate::api::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatheriaError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
