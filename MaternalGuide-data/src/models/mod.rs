// Wire models exchanged with the prediction backend
pub mod prediction;

pub use prediction::{AlertAcknowledgment, AlertRequest, HealthResponse, PredictRequest, PredictResponse};
