use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::AppState;
use crate::entities::assessment::PublicConnectionStatus;
use crate::entities::conversions::convert_to_public_connection;

/// Probe the prediction backend and return the connectivity indicator
///
/// Always answers 200: a disconnected backend is a status, not an error.
#[utoipa::path(
    get,
    path = "/connection",
    responses(
        (status = 200, description = "Connectivity indicator", body = PublicConnectionStatus)
    ),
    tag = "connection"
)]
#[instrument(skip(orchestrator))]
pub async fn get_connection(State(orchestrator): State<AppState>) -> Json<PublicConnectionStatus> {
    let status = orchestrator.check_connection().await;
    info!("Connection indicator: {}", status.summary());
    Json(convert_to_public_connection(&status))
}
