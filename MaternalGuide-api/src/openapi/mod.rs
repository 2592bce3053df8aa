use axum::Json;
use utoipa::OpenApi;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,
        crate::api::handlers::connection::get_connection,

        // Assessment endpoints
        crate::api::handlers::assessment::get_assessment,
        crate::api::handlers::assessment::get_fields,
        crate::api::handlers::assessment::update_form,
        crate::api::handlers::assessment::update_contact,
        crate::api::handlers::assessment::submit_assessment,
        crate::api::handlers::assessment::send_alert,
        crate::api::handlers::assessment::dismiss_notification,
        crate::api::handlers::assessment::leave_assessment
    ),
    components(
        schemas(
            // Entities
            crate::entities::assessment::PublicViewState,
            crate::entities::assessment::PublicAssessmentResult,
            crate::entities::assessment::PublicNotification,
            crate::entities::assessment::PublicConnectionStatus,
            crate::entities::assessment::FieldDescriptor,
            crate::entities::assessment::FormUpdateRequest,
            crate::entities::assessment::ContactUpdateRequest,
            crate::entities::assessment::SubmitResponse,
            crate::entities::assessment::AlertResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Shell liveness"),
        (name = "connection", description = "Prediction backend connectivity"),
        (name = "assessment", description = "Assessment form, submission and alerts")
    ),
    info(
        title = "MaternalGuide API",
        version = "0.1.0",
        description = "View state and transitions of the pregnancy risk assessment page",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
