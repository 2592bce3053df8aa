use axum::{http::StatusCode, response::IntoResponse, Json};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Liveness of the shell itself
///
/// Backend reachability is reported separately by `GET /connection`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the shell can answer
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Environment information
    pub environment: String,
}

// Track the time when the server started
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Record the server start time used for uptime reporting
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(unix_now);
}

/// Health check endpoint to verify the shell is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Shell is running", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument]
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");

    let now = unix_now();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    };

    (StatusCode::OK, Json(response))
}
