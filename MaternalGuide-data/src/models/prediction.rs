use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Health check payload returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Free-form backend status text
    pub status: String,
}

/// Coerced patient parameters posted to `/predict/`
///
/// Field names follow the backend schema exactly, including its spelling.
/// The three flags are always 0 or 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    #[serde(rename = "Age")]
    pub age: f64,

    #[serde(rename = "SystolicBP")]
    pub systolic_bp: f64,

    #[serde(rename = "DiastolicBP")]
    pub diastolic_bp: f64,

    /// Blood sugar (mmol/L)
    #[serde(rename = "BS")]
    pub blood_sugar: f64,

    #[serde(rename = "BodyTemp")]
    pub body_temp: f64,

    #[serde(rename = "HeartRate")]
    pub heart_rate: f64,

    #[serde(rename = "PulsePressure")]
    pub pulse_pressure: f64,

    pub gravida: f64,

    pub parity: f64,

    pub gestational_age_weeks: f64,

    #[serde(rename = "Age_yrs")]
    pub age_yrs: f64,

    #[serde(rename = "BMI")]
    pub bmi: f64,

    pub diabetes: u8,

    pub hypertension: u8,

    /// Hemoglobin (g/dL)
    #[serde(rename = "HB")]
    pub hemoglobin: f64,

    pub fetal_weight: f64,

    #[serde(rename = "Protien_Uria")]
    pub proteinuria: u8,

    pub amniotic_fluid_levels: f64,
}

/// Prediction payload returned by `/predict/`
///
/// Only `Risk_Level` is mandatory. Any other field the backend adds is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictResponse {
    #[serde(rename = "Risk_Level")]
    pub risk_level: String,

    #[serde(rename = "Disease_Status", default, skip_serializing_if = "Option::is_none")]
    pub disease_status: Option<String>,

    #[serde(
        rename = "Disease_Probability",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub disease_probability: Option<String>,

    #[serde(rename = "AI_Advice", default, skip_serializing_if = "Option::is_none")]
    pub ai_advice: Option<String>,
}

/// Alert trigger posted to `/send_alert/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertRequest {
    #[serde(rename = "Risk_Level")]
    pub risk_level: String,

    /// Serialized as `null` when absent
    pub phone_number: Option<String>,
}

impl AlertRequest {
    pub fn new(risk_level: impl Into<String>, phone_number: Option<String>) -> Self {
        Self {
            risk_level: risk_level.into(),
            phone_number,
        }
    }
}

/// Delivery acknowledgment of `/send_alert/`; its shape is not relied upon
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AlertAcknowledgment(pub Value);

/// Accept a probability sent either as text (`"82%"`) or as a bare number
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "Disease_Probability must be a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> PredictRequest {
        PredictRequest {
            age: 28.0,
            systolic_bp: 140.0,
            diastolic_bp: 95.0,
            blood_sugar: 7.2,
            body_temp: 37.5,
            heart_rate: 88.0,
            pulse_pressure: 45.0,
            gravida: 0.0,
            parity: 0.0,
            gestational_age_weeks: 0.0,
            age_yrs: 0.0,
            bmi: 0.0,
            diabetes: 0,
            hypertension: 1,
            hemoglobin: 0.0,
            fetal_weight: 0.0,
            proteinuria: 1,
            amniotic_fluid_levels: 0.0,
        }
    }

    #[test]
    fn test_predict_request_uses_backend_field_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        let object = value.as_object().unwrap();

        let expected = [
            "Age", "SystolicBP", "DiastolicBP", "BS", "BodyTemp", "HeartRate",
            "PulsePressure", "gravida", "parity", "gestational_age_weeks", "Age_yrs",
            "BMI", "diabetes", "hypertension", "HB", "fetal_weight", "Protien_Uria",
            "amniotic_fluid_levels",
        ];
        assert_eq!(object.len(), expected.len());
        for key in expected {
            assert!(object.contains_key(key), "missing key {}", key);
        }

        assert_eq!(value["hypertension"], json!(1));
        assert_eq!(value["Protien_Uria"], json!(1));
        assert_eq!(value["BS"], json!(7.2));
    }

    #[test]
    fn test_predict_response_with_all_fields() {
        let response: PredictResponse = serde_json::from_value(json!({
            "Risk_Level": "high risk",
            "Disease_Status": "positive",
            "Disease_Probability": "82%",
            "AI_Advice": "Consult your doctor immediately."
        }))
        .unwrap();

        assert_eq!(response.risk_level, "high risk");
        assert_eq!(response.disease_status.as_deref(), Some("positive"));
        assert_eq!(response.disease_probability.as_deref(), Some("82%"));
        assert_eq!(response.ai_advice.as_deref(), Some("Consult your doctor immediately."));
    }

    #[test]
    fn test_predict_response_optional_fields() {
        let response: PredictResponse =
            serde_json::from_value(json!({ "Risk_Level": "low risk", "extra": true })).unwrap();
        assert_eq!(response.disease_status, None);
        assert_eq!(response.disease_probability, None);
        assert_eq!(response.ai_advice, None);

        let numeric: PredictResponse =
            serde_json::from_value(json!({ "Risk_Level": "mid risk", "Disease_Probability": 0.82 }))
                .unwrap();
        assert_eq!(numeric.disease_probability.as_deref(), Some("0.82"));
    }

    #[test]
    fn test_predict_response_rejects_bad_shapes() {
        assert!(serde_json::from_value::<PredictResponse>(json!({ "Disease_Status": "negative" })).is_err());
        assert!(serde_json::from_value::<PredictResponse>(json!({ "Risk_Level": 3 })).is_err());
        assert!(serde_json::from_value::<PredictResponse>(
            json!({ "Risk_Level": "low risk", "Disease_Probability": [1, 2] })
        )
        .is_err());
    }

    #[test]
    fn test_alert_request_serializes_null_phone_number() {
        let value = serde_json::to_value(AlertRequest::new("mid risk", None)).unwrap();
        assert_eq!(value, json!({ "Risk_Level": "mid risk", "phone_number": null }));
    }
}
