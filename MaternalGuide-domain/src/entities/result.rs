use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Risk classification assigned by the prediction backend
///
/// The backend sends fixed lower-case strings. Anything else is kept
/// verbatim as `Unknown` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Mid,
    High,
    Unknown(String),
}

impl RiskLevel {
    /// Map the backend string onto a risk level
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "low risk" => RiskLevel::Low,
            "mid risk" => RiskLevel::Mid,
            "high risk" => RiskLevel::High,
            other => RiskLevel::Unknown(other.to_string()),
        }
    }

    /// Backend text, exactly as received
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low risk",
            RiskLevel::Mid => "mid risk",
            RiskLevel::High => "high risk",
            RiskLevel::Unknown(raw) => raw,
        }
    }

    pub fn severity(&self) -> RiskSeverity {
        match self {
            RiskLevel::High => RiskSeverity::Danger,
            RiskLevel::Mid => RiskSeverity::Warning,
            RiskLevel::Low => RiskSeverity::Safe,
            RiskLevel::Unknown(_) => RiskSeverity::Neutral,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RiskLevel::from_wire(&raw))
    }
}

/// Visual weight a renderer should give to a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    /// High risk (red, warning icon)
    Danger,
    /// Mid risk (amber, warning icon)
    Warning,
    /// Low risk (green, check icon)
    Safe,
    /// Unrecognised level (grey, neutral icon)
    Neutral,
}

/// Outcome of one completed submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    pub disease_status: Option<String>,
    pub disease_probability: Option<String>,
    /// Free-text recommendation generated by the backend
    pub advice: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn severity(&self) -> RiskSeverity {
        self.risk_level.severity()
    }
}
