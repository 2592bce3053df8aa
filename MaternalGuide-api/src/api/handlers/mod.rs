pub mod assessment;
pub mod connection;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

use std::sync::Arc;

use maternal_guide_domain::AssessmentOrchestrator;

/// Shared orchestrator, one per process (one page session)
pub type AppState = Arc<AssessmentOrchestrator>;

// Re-export handlers for easier imports
pub use assessment::{
    dismiss_notification, get_assessment, get_fields, leave_assessment, send_alert,
    submit_assessment, update_contact, update_form,
};
pub use connection::get_connection;
pub use health::health_check;
