//! Error types surfaced to the dashboard user.

use thiserror::Error;

/// Form input that cannot be turned into a request. No request is issued.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number (got \"{value}\")")]
    NotANumber { field: &'static str, value: String },
    #[error("Sensor count must be a positive whole number (got \"{0}\")")]
    SensorCount(String),
}

/// A request that did not produce a result batch. Every variant is terminal for
/// the request that raised it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Optimization request failed with HTTP status {status}")]
    Status { status: u16 },
    #[error("Optimization request failed: {0}")]
    Network(String),
    #[error("Unexpected optimization response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None if err.is_decode() => Self::Decode(err.to_string()),
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
