use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Endpoint returned no completion text")]
    EmptyResponse,
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl InsightError {
    /// Whether this error must stop the caller before any call is attempted.
    pub fn is_config(&self) -> bool {
        matches!(self, InsightError::InvalidConfig(_))
    }
}
