use async_trait::async_trait;

use crate::models::{AlertAcknowledgment, AlertRequest, HealthResponse, PredictRequest, PredictResponse};

pub mod errors;
pub mod http;

pub use errors::ApiError;
pub use http::HttpPredictionClient;

/// Operation paths on the prediction backend
pub mod paths {
    pub const HEALTH: &str = "/";
    pub const PREDICT: &str = "/predict/";
    pub const SEND_ALERT: &str = "/send_alert/";
}

/// The three calls the assessment workflow makes against the backend
///
/// Implementations map requests to responses only: no retry, caching or
/// timeout policy. A failed call is terminal for the user action that issued it.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// `GET /` connectivity probe
    async fn health_check(&self) -> Result<HealthResponse, ApiError>;

    /// `POST /predict/` with the coerced patient parameters
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError>;

    /// `POST /send_alert/` for the current risk level and contact address
    async fn send_alert(&self, request: &AlertRequest) -> Result<AlertAcknowledgment, ApiError>;
}
