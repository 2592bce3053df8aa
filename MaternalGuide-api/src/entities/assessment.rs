use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Prediction shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicAssessmentResult {
    /// Risk level text exactly as returned by the backend
    #[schema(example = "high risk")]
    pub risk_level: String,

    /// Visual weight for the risk level: danger, warning, safe or neutral
    #[schema(example = "danger")]
    pub severity: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_probability: Option<String>,

    /// Free-text advice, displayed verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,

    pub received_at: DateTime<Utc>,
}

/// Transient message for the user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicNotification {
    pub id: Uuid,

    /// success or error
    pub kind: String,

    pub message: String,

    pub created_at: DateTime<Utc>,
}

/// Backend connectivity indicator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicConnectionStatus {
    /// checking, connected or disconnected
    pub state: String,

    pub connected: bool,

    /// Status text from the backend, or the failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// One-line text for a status badge
    pub summary: String,
}

/// Everything a renderer needs to draw the assessment page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicViewState {
    /// idle, submitting or resulted
    pub phase: String,

    /// Raw field text keyed by wire name
    pub form: BTreeMap<String, String>,

    /// Required fields that are still blank (advisory only)
    pub missing_required_fields: Vec<String>,

    pub contact: String,

    pub show_contact_instructions: bool,

    /// Steps for receiving alerts, present once a contact has been typed
    pub contact_instructions: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PublicAssessmentResult>,

    pub can_submit: bool,

    pub can_send_alert: bool,

    pub sending_alert: bool,

    pub notifications: Vec<PublicNotification>,

    pub connection: PublicConnectionStatus,
}

/// One entry of the assessment form catalogue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldDescriptor {
    /// Wire name, used as the key in form updates
    #[schema(example = "SystolicBP")]
    pub name: String,

    #[schema(example = "Systolic BP")]
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "mmHg")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// patient_information, vital_signs, pregnancy_details or medical_history
    pub section: String,

    /// Yes/no checkbox field
    pub flag: bool,

    pub required: bool,
}

/// Partial form update keyed by wire name
///
/// Values may be strings, numbers, booleans or null (cleared).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FormUpdateRequest {
    #[schema(value_type = Object, example = json!({"Age": "28", "SystolicBP": 140, "hypertension": true}))]
    pub fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactUpdateRequest {
    #[schema(example = "+923001234567")]
    pub contact: String,
}

/// Response of a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub result: PublicAssessmentResult,
    pub view: PublicViewState,
}

/// Response of a delivered alert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResponse {
    /// Contact the alert was sent to
    pub phone_number: String,
    pub view: PublicViewState,
}
