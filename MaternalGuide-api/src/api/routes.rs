use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{self, assessment, connection, health, AppState};
use crate::openapi;

/// Create the application router
pub fn create_app(orchestrator: AppState) -> Router {
    debug!("Creating application router");

    // Assessment page: view state and its named transitions
    let assessment_routes = Router::new()
        .route("/assessment", get(assessment::get_assessment))
        .route("/assessment/fields", get(assessment::get_fields))
        .route("/assessment/form", put(assessment::update_form))
        .route("/assessment/contact", put(assessment::update_contact))
        .route("/assessment/submit", post(assessment::submit_assessment))
        .route("/assessment/alert", post(assessment::send_alert))
        .route("/assessment/leave", post(assessment::leave_assessment))
        .route(
            "/assessment/notifications/:id",
            delete(assessment::dismiss_notification),
        );

    debug!("Assessment routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/connection", get(connection::get_connection))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    let app = Router::new()
        .merge(public_routes)
        .merge(assessment_routes)
        .with_state(orchestrator)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    handlers::health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}
