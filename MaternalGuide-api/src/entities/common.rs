use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response format for the shell
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details,
        }
    }

    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            "not_found",
            format!("The requested {} could not be found", resource),
            None,
        )
    }

    /// Create a validation error response
    pub fn validation_error(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self::new("validation_error", message, details)
    }

    /// The request is valid but the assessment is in the wrong state for it
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("conflict", message, None)
    }

    /// The prediction backend failed to serve the request
    pub fn upstream_error(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(
            "upstream_error",
            message,
            Some(serde_json::json!({ "cause": cause.into() })),
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::UNPROCESSABLE_ENTITY,
            "conflict" => StatusCode::CONFLICT,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
