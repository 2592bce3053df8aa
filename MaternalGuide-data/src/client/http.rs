use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{paths, ApiError, PredictionApi};
use crate::config::ApiConfig;
use crate::models::{AlertAcknowledgment, AlertRequest, HealthResponse, PredictRequest, PredictResponse};

/// `reqwest` implementation of [`PredictionApi`]
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    config: ApiConfig,
}

impl HttpPredictionClient {
    /// Create a client for the given configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }

    /// Base address the client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionClient {
    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let url = self.config.endpoint(paths::HEALTH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Health check request failed: {}", e);
            ApiError::from(e)
        })?;

        read_json(response).await
    }

    #[instrument(skip(self, request))]
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        let url = self.config.endpoint(paths::PREDICT);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await.map_err(|e| {
            error!("Predict request failed: {}", e);
            ApiError::from(e)
        })?;

        let prediction: PredictResponse = read_json(response).await?;
        if prediction.risk_level.trim().is_empty() {
            return Err(ApiError::MalformedResponse("Risk_Level is empty".to_string()));
        }

        Ok(prediction)
    }

    #[instrument(skip(self, request), fields(risk_level = %request.risk_level))]
    async fn send_alert(&self, request: &AlertRequest) -> Result<AlertAcknowledgment, ApiError> {
        let url = self.config.endpoint(paths::SEND_ALERT);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await.map_err(|e| {
            error!("Send alert request failed: {}", e);
            ApiError::from(e)
        })?;

        let response = ensure_success(response).await?;
        let body = response.bytes().await?;

        // The acknowledgment is not consumed, so a non-JSON body is kept as text
        let ack = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };

        Ok(AlertAcknowledgment(ack))
    }
}

/// Turn any non-2xx answer into [`ApiError::Status`]
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Prediction service answered {}: {}", status, body);
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        error!("Could not decode prediction service response: {}", e);
        ApiError::from(e)
    })
}
