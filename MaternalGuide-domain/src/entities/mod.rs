// Domain entities and value objects
pub mod alert;
pub mod assessment;
pub mod conversions;
pub mod notification;
pub mod result;

// Re-export common types for easier imports
pub use alert::AlertRequest;
pub use assessment::{AssessmentField, AssessmentForm, AssessmentInput, FieldSection, FormError};
pub use notification::{Notification, NotificationKind};
pub use result::{AssessmentResult, RiskLevel, RiskSeverity};
