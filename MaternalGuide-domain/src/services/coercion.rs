use crate::entities::assessment::{AssessmentField, AssessmentForm, AssessmentInput};

/// Parse the leading decimal number of `raw`, or 0 when there is none
///
/// Leading whitespace is skipped and trailing garbage ignored, so
/// `"12.5kg"` gives 12.5. Non-finite results and negative zero become 0.
pub fn parse_number(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim_start(), true);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a yes/no flag from the leading integer of `raw`
///
/// Always 0 or 1: any non-zero integer counts as set.
pub fn parse_flag(raw: &str) -> u8 {
    let prefix = numeric_prefix(raw.trim_start(), false);
    if prefix.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        1
    } else {
        0
    }
}

/// Longest prefix of `text` that forms a number, or `""`
fn numeric_prefix(text: &str, allow_fraction: bool) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if allow_fraction {
        if end < bytes.len() && bytes[end] == b'.' {
            let mut cursor = end + 1;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            let fraction = cursor - end - 1;
            if fraction > 0 {
                digits += fraction;
                end = cursor;
            }
        }

        if digits > 0 && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut cursor = end + 1;
            if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
                cursor += 1;
            }
            let exp_start = cursor;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            if cursor > exp_start {
                end = cursor;
            }
        }
    }

    if digits == 0 {
        ""
    } else {
        &text[..end]
    }
}

/// Coerce a single field according to its kind
pub fn coerce_field(field: AssessmentField, raw: &str) -> f64 {
    if field.is_flag() {
        f64::from(parse_flag(raw))
    } else {
        parse_number(raw)
    }
}

/// Coerce the whole form into typed input, once, at submission time
pub fn coerce_form(form: &AssessmentForm) -> AssessmentInput {
    let number = |field: AssessmentField| parse_number(form.get(field));
    let flag = |field: AssessmentField| parse_flag(form.get(field));

    AssessmentInput {
        age: number(AssessmentField::Age),
        age_yrs: number(AssessmentField::AgeYears),
        bmi: number(AssessmentField::Bmi),
        systolic_bp: number(AssessmentField::SystolicBp),
        diastolic_bp: number(AssessmentField::DiastolicBp),
        heart_rate: number(AssessmentField::HeartRate),
        body_temp: number(AssessmentField::BodyTemp),
        blood_sugar: number(AssessmentField::BloodSugar),
        pulse_pressure: number(AssessmentField::PulsePressure),
        gravida: number(AssessmentField::Gravida),
        parity: number(AssessmentField::Parity),
        gestational_age_weeks: number(AssessmentField::GestationalAgeWeeks),
        hemoglobin: number(AssessmentField::Hemoglobin),
        fetal_weight: number(AssessmentField::FetalWeight),
        amniotic_fluid_levels: number(AssessmentField::AmnioticFluidLevels),
        diabetes: flag(AssessmentField::Diabetes),
        hypertension: flag(AssessmentField::Hypertension),
        proteinuria: flag(AssessmentField::Proteinuria),
    }
}
