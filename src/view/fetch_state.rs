//! Per-fetch lifecycle state.
//!
//! Concurrent fetches must not collapse into a single boolean loading
//! flag: that representation cannot express a partial failure. Each
//! fetch is tracked on its own here, and aggregate readiness is derived
//! from the individual states, never stored.

use std::fmt;

/// Lifecycle of one remote fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    InFlight,
    Succeeded(T),
    /// The fetch settled with a transport failure. The section backed by
    /// it shows no data; sections backed by other fetches stay usable.
    Failed(String),
}

impl<T> FetchState<T> {
    /// True once the fetch has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Succeeded(_) | FetchState::Failed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    /// The fetched value, if the fetch succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// Error message of a failed fetch.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn from_result<E: fmt::Display>(result: Result<T, E>) -> FetchState<T> {
        match result {
            Ok(value) => FetchState::Succeeded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}
