use serde::{Deserialize, Serialize};
use validator::Validate;

use super::result::RiskLevel;

/// Phrase a recipient sends to the messaging sandbox before alerts reach them
pub const SANDBOX_JOIN_PHRASE: &str = "join guide-being";

/// Sandbox number the join phrase is sent to
pub const SANDBOX_NUMBER: &str = "+1 415 523 8886";

/// Expected contact format, with country code
pub const CONTACT_EXAMPLE: &str = "+923001234567";

/// Message shown when an alert is requested without a contact address
pub const MISSING_CONTACT_MESSAGE: &str = "Please enter a WhatsApp number first!";

/// Alert for the current result, built fresh for every send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AlertRequest {
    pub risk_level: RiskLevel,

    /// Contact address exactly as entered
    #[validate(length(min = 1, message = "Please enter a WhatsApp number first!"))]
    pub phone_number: String,
}

impl AlertRequest {
    pub fn new(risk_level: RiskLevel, contact: &str) -> Self {
        Self {
            risk_level,
            phone_number: contact.to_string(),
        }
    }
}

/// Steps shown once the user starts typing a contact address
pub fn contact_instructions() -> Vec<String> {
    vec![
        format!("Send \"{}\" to {} on WhatsApp", SANDBOX_JOIN_PHRASE, SANDBOX_NUMBER),
        format!("After joining, enter your number above (e.g., {})", CONTACT_EXAMPLE),
        "Complete the assessment and you'll receive instant alerts for high or mid-risk cases".to_string(),
    ]
}
