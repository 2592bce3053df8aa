// MaternalGuide Domain
// This crate contains the assessment logic for the MaternalGuide client

// Services that implement the assessment flow
pub mod services;

// Domain entities
pub mod entities;

// Backend connectivity indicator
pub mod health;

// Testing utilities - only available in tests or with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use entities::{AssessmentField, AssessmentForm, AssessmentResult, RiskLevel};
pub use health::ConnectionStatus;
pub use services::{AlertOutcome, AssessmentOrchestrator, AssessmentPhase, SubmitOutcome, ViewState};
