// Handler tests drive the full router with `oneshot`
mod assessment_test;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use maternal_guide_domain::testing::MockPredictionApi;
use maternal_guide_domain::AssessmentOrchestrator;

use crate::api::{create_app, AppState};

/// Router backed by a scripted prediction API
pub(super) fn test_app(api: Arc<MockPredictionApi>) -> (Router, AppState) {
    let orchestrator = Arc::new(AssessmentOrchestrator::new(api));
    (create_app(orchestrator.clone()), orchestrator)
}

/// Send one request and decode the JSON body (Null when empty)
pub(super) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
