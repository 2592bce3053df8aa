use thiserror::Error;

use crate::config::ConfigError;

/// Error type for prediction service calls
///
/// Every variant means "the call failed" to callers; the kinds only exist
/// so logs and tests can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Network or IO failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("Request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend answered with a body that does not match the schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::MalformedResponse(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::MalformedResponse(error.to_string())
    }
}
