pub mod handlers;
pub mod routes;

use axum::Router;

pub use handlers::AppState;
pub use routes::create_app;

/// Create the application router
pub fn create_application(orchestrator: AppState) -> Router {
    routes::create_app(orchestrator)
}
