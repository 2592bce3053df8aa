// MaternalGuide-api lib.rs
//
// Presentation shell for the assessment page. It owns one orchestrator and
// exposes its view state and transitions over HTTP.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;

pub use api::{create_application, AppState};
