// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or with the "mock" feature

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use maternal_guide_data::models::{
    AlertAcknowledgment, AlertRequest, HealthResponse, PredictRequest, PredictResponse,
};
use maternal_guide_data::{ApiError, PredictionApi};

/// Build a backend prediction with only a risk level
pub fn prediction(risk_level: &str) -> PredictResponse {
    PredictResponse {
        risk_level: risk_level.to_string(),
        disease_status: None,
        disease_probability: None,
        ai_advice: None,
    }
}

/// Build a backend prediction with every optional field filled
pub fn full_prediction(risk_level: &str, status: &str, probability: &str, advice: &str) -> PredictResponse {
    PredictResponse {
        risk_level: risk_level.to_string(),
        disease_status: Some(status.to_string()),
        disease_probability: Some(probability.to_string()),
        ai_advice: Some(advice.to_string()),
    }
}

/// Scriptable in-memory implementation of [`PredictionApi`]
///
/// Every call is recorded before it resolves. A gate semaphore holds calls
/// in flight until the test adds permits.
pub struct MockPredictionApi {
    health: Mutex<Result<HealthResponse, ApiError>>,
    prediction: Mutex<Result<PredictResponse, ApiError>>,
    alert: Mutex<Result<AlertAcknowledgment, ApiError>>,
    predict_gate: Option<Arc<Semaphore>>,
    alert_gate: Option<Arc<Semaphore>>,
    health_calls: AtomicUsize,
    predict_calls: Mutex<Vec<PredictRequest>>,
    alert_calls: Mutex<Vec<AlertRequest>>,
}

impl Default for MockPredictionApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionApi {
    /// Create a mock that answers every call successfully
    pub fn new() -> Self {
        Self {
            health: Mutex::new(Ok(HealthResponse { status: "ok".to_string() })),
            prediction: Mutex::new(Ok(prediction("low risk"))),
            alert: Mutex::new(Ok(AlertAcknowledgment(serde_json::json!({ "status": "sent" })))),
            predict_gate: None,
            alert_gate: None,
            health_calls: AtomicUsize::new(0),
            predict_calls: Mutex::new(Vec::new()),
            alert_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_health_status(self, status: &str) -> Self {
        *self.health.lock().unwrap() = Ok(HealthResponse { status: status.to_string() });
        self
    }

    pub fn with_health_failure(self, error: ApiError) -> Self {
        *self.health.lock().unwrap() = Err(error);
        self
    }

    pub fn with_prediction(self, response: PredictResponse) -> Self {
        self.set_prediction(Ok(response));
        self
    }

    pub fn with_prediction_failure(self, error: ApiError) -> Self {
        self.set_prediction(Err(error));
        self
    }

    pub fn with_alert_failure(self, error: ApiError) -> Self {
        self.set_alert(Err(error));
        self
    }

    /// Hold every predict call until the gate has a permit
    pub fn with_predict_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.predict_gate = Some(gate);
        self
    }

    /// Hold every alert call until the gate has a permit
    pub fn with_alert_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.alert_gate = Some(gate);
        self
    }

    /// Change the answer of later predict calls
    pub fn set_prediction(&self, response: Result<PredictResponse, ApiError>) {
        *self.prediction.lock().unwrap() = response;
    }

    /// Change the answer of later alert calls
    pub fn set_alert(&self, response: Result<AlertAcknowledgment, ApiError>) {
        *self.alert.lock().unwrap() = response;
    }

    pub fn health_call_count(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn predict_call_count(&self) -> usize {
        self.predict_calls.lock().unwrap().len()
    }

    pub fn alert_call_count(&self) -> usize {
        self.alert_calls.lock().unwrap().len()
    }

    pub fn predict_requests(&self) -> Vec<PredictRequest> {
        self.predict_calls.lock().unwrap().clone()
    }

    pub fn alert_requests(&self) -> Vec<AlertRequest> {
        self.alert_calls.lock().unwrap().clone()
    }
}

async fn pass_gate(gate: &Option<Arc<Semaphore>>) {
    if let Some(gate) = gate {
        // A closed semaphore releases every waiter
        if let Ok(permit) = gate.acquire().await {
            permit.forget();
        }
    }
}

#[async_trait]
impl PredictionApi for MockPredictionApi {
    async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health.lock().unwrap().clone()
    }

    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        self.predict_calls.lock().unwrap().push(request.clone());
        pass_gate(&self.predict_gate).await;
        self.prediction.lock().unwrap().clone()
    }

    async fn send_alert(&self, request: &AlertRequest) -> Result<AlertAcknowledgment, ApiError> {
        self.alert_calls.lock().unwrap().push(request.clone());
        pass_gate(&self.alert_gate).await;
        self.alert.lock().unwrap().clone()
    }
}
