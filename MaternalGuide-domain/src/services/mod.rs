// Domain services
// Coercion of raw form input and the assessment orchestrator.
pub mod coercion;
pub mod orchestrator;

pub use coercion::{coerce_field, coerce_form, parse_flag, parse_number};
pub use orchestrator::{AlertOutcome, AssessmentOrchestrator, AssessmentPhase, SubmitOutcome, ViewState};
