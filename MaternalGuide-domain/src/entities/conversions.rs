use chrono::{DateTime, Utc};
use maternal_guide_data::models as data;

use crate::entities::alert::AlertRequest;
use crate::entities::assessment::AssessmentInput;
use crate::entities::result::{AssessmentResult, RiskLevel};

/// Conversion functions between domain entities and wire models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert coerced input to the `/predict/` payload
pub fn convert_to_data_predict_request(input: &AssessmentInput) -> data::PredictRequest {
    data::PredictRequest {
        age: input.age,
        systolic_bp: input.systolic_bp,
        diastolic_bp: input.diastolic_bp,
        blood_sugar: input.blood_sugar,
        body_temp: input.body_temp,
        heart_rate: input.heart_rate,
        pulse_pressure: input.pulse_pressure,
        gravida: input.gravida,
        parity: input.parity,
        gestational_age_weeks: input.gestational_age_weeks,
        age_yrs: input.age_yrs,
        bmi: input.bmi,
        diabetes: input.diabetes,
        hypertension: input.hypertension,
        hemoglobin: input.hemoglobin,
        fetal_weight: input.fetal_weight,
        proteinuria: input.proteinuria,
        amniotic_fluid_levels: input.amniotic_fluid_levels,
    }
}

/// Convert a `/predict/` response to a domain result
///
/// Blank optional strings are treated as absent.
pub fn convert_to_domain_result(response: data::PredictResponse, received_at: DateTime<Utc>) -> AssessmentResult {
    AssessmentResult {
        risk_level: RiskLevel::from_wire(&response.risk_level),
        disease_status: non_blank(response.disease_status),
        disease_probability: non_blank(response.disease_probability),
        advice: non_blank(response.ai_advice),
        received_at,
    }
}

/// Convert a validated domain alert to the `/send_alert/` payload
pub fn convert_to_data_alert_request(request: &AlertRequest) -> data::AlertRequest {
    data::AlertRequest::new(request.risk_level.as_str(), Some(request.phone_number.clone()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
