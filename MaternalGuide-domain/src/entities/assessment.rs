use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when editing the assessment form
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// No field carries this wire name
    #[error("Unknown assessment field: {0}")]
    UnknownField(String),

    /// A checkbox edit was addressed to a numeric field
    #[error("Field {0} is not a yes/no flag")]
    NotAFlag(String),
}

/// One patient parameter of the assessment form, in form order
///
/// Serialized with the backend wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssessmentField {
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Age_yrs")]
    AgeYears,
    #[serde(rename = "BMI")]
    Bmi,
    #[serde(rename = "SystolicBP")]
    SystolicBp,
    #[serde(rename = "DiastolicBP")]
    DiastolicBp,
    #[serde(rename = "HeartRate")]
    HeartRate,
    #[serde(rename = "BodyTemp")]
    BodyTemp,
    #[serde(rename = "BS")]
    BloodSugar,
    #[serde(rename = "PulsePressure")]
    PulsePressure,
    #[serde(rename = "gravida")]
    Gravida,
    #[serde(rename = "parity")]
    Parity,
    #[serde(rename = "gestational_age_weeks")]
    GestationalAgeWeeks,
    #[serde(rename = "HB")]
    Hemoglobin,
    #[serde(rename = "fetal_weight")]
    FetalWeight,
    #[serde(rename = "amniotic_fluid_levels")]
    AmnioticFluidLevels,
    #[serde(rename = "diabetes")]
    Diabetes,
    #[serde(rename = "hypertension")]
    Hypertension,
    #[serde(rename = "Protien_Uria")]
    Proteinuria,
}

impl AssessmentField {
    /// All fields in the order the form presents them
    pub const ALL: [AssessmentField; 18] = [
        AssessmentField::Age,
        AssessmentField::AgeYears,
        AssessmentField::Bmi,
        AssessmentField::SystolicBp,
        AssessmentField::DiastolicBp,
        AssessmentField::HeartRate,
        AssessmentField::BodyTemp,
        AssessmentField::BloodSugar,
        AssessmentField::PulsePressure,
        AssessmentField::Gravida,
        AssessmentField::Parity,
        AssessmentField::GestationalAgeWeeks,
        AssessmentField::Hemoglobin,
        AssessmentField::FetalWeight,
        AssessmentField::AmnioticFluidLevels,
        AssessmentField::Diabetes,
        AssessmentField::Hypertension,
        AssessmentField::Proteinuria,
    ];

    /// Name used by the prediction backend
    pub fn wire_name(&self) -> &'static str {
        match self {
            AssessmentField::Age => "Age",
            AssessmentField::AgeYears => "Age_yrs",
            AssessmentField::Bmi => "BMI",
            AssessmentField::SystolicBp => "SystolicBP",
            AssessmentField::DiastolicBp => "DiastolicBP",
            AssessmentField::HeartRate => "HeartRate",
            AssessmentField::BodyTemp => "BodyTemp",
            AssessmentField::BloodSugar => "BS",
            AssessmentField::PulsePressure => "PulsePressure",
            AssessmentField::Gravida => "gravida",
            AssessmentField::Parity => "parity",
            AssessmentField::GestationalAgeWeeks => "gestational_age_weeks",
            AssessmentField::Hemoglobin => "HB",
            AssessmentField::FetalWeight => "fetal_weight",
            AssessmentField::AmnioticFluidLevels => "amniotic_fluid_levels",
            AssessmentField::Diabetes => "diabetes",
            AssessmentField::Hypertension => "hypertension",
            AssessmentField::Proteinuria => "Protien_Uria",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentField::Age => "Age",
            AssessmentField::AgeYears => "Age (years)",
            AssessmentField::Bmi => "BMI",
            AssessmentField::SystolicBp => "Systolic BP",
            AssessmentField::DiastolicBp => "Diastolic BP",
            AssessmentField::HeartRate => "Heart Rate",
            AssessmentField::BodyTemp => "Body Temperature",
            AssessmentField::BloodSugar => "Blood Sugar",
            AssessmentField::PulsePressure => "Pulse Pressure",
            AssessmentField::Gravida => "Gravida",
            AssessmentField::Parity => "Parity",
            AssessmentField::GestationalAgeWeeks => "Gestational Age",
            AssessmentField::Hemoglobin => "Hemoglobin",
            AssessmentField::FetalWeight => "Fetal Weight",
            AssessmentField::AmnioticFluidLevels => "Amniotic Fluid Levels",
            AssessmentField::Diabetes => "Diabetes",
            AssessmentField::Hypertension => "Hypertension",
            AssessmentField::Proteinuria => "Protein in Urine",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            AssessmentField::Bmi => Some("kg/m²"),
            AssessmentField::SystolicBp | AssessmentField::DiastolicBp => Some("mmHg"),
            AssessmentField::HeartRate => Some("bpm"),
            AssessmentField::BodyTemp => Some("°C"),
            AssessmentField::BloodSugar => Some("mmol/L"),
            AssessmentField::GestationalAgeWeeks => Some("weeks"),
            AssessmentField::Hemoglobin => Some("g/dL"),
            AssessmentField::FetalWeight => Some("kg"),
            AssessmentField::AmnioticFluidLevels => Some("cm"),
            _ => None,
        }
    }

    /// Example value shown in an empty input
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            AssessmentField::Age | AssessmentField::AgeYears => Some("25"),
            AssessmentField::Bmi => Some("22.5"),
            AssessmentField::SystolicBp => Some("120"),
            AssessmentField::DiastolicBp => Some("80"),
            AssessmentField::HeartRate => Some("72"),
            AssessmentField::BodyTemp => Some("37.0"),
            AssessmentField::BloodSugar => Some("5.0"),
            AssessmentField::PulsePressure => Some("40"),
            AssessmentField::Gravida => Some("1"),
            AssessmentField::Parity => Some("0"),
            AssessmentField::GestationalAgeWeeks => Some("20"),
            AssessmentField::Hemoglobin => Some("12.0"),
            AssessmentField::FetalWeight => Some("1.5"),
            AssessmentField::AmnioticFluidLevels => Some("5.0"),
            AssessmentField::Diabetes | AssessmentField::Hypertension | AssessmentField::Proteinuria => None,
        }
    }

    /// Yes/no checkbox fields, sent as 0 or 1
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            AssessmentField::Diabetes | AssessmentField::Hypertension | AssessmentField::Proteinuria
        )
    }

    /// Vitals marked as required on the form
    ///
    /// Advisory only: a missing value is still submitted as 0.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            AssessmentField::Age
                | AssessmentField::SystolicBp
                | AssessmentField::DiastolicBp
                | AssessmentField::HeartRate
                | AssessmentField::BodyTemp
                | AssessmentField::BloodSugar
                | AssessmentField::PulsePressure
        )
    }

    /// Form section the field belongs to
    pub fn section(&self) -> FieldSection {
        match self {
            AssessmentField::Age | AssessmentField::AgeYears | AssessmentField::Bmi => {
                FieldSection::PatientInformation
            }
            AssessmentField::SystolicBp
            | AssessmentField::DiastolicBp
            | AssessmentField::HeartRate
            | AssessmentField::BodyTemp
            | AssessmentField::BloodSugar
            | AssessmentField::PulsePressure => FieldSection::VitalSigns,
            AssessmentField::Gravida
            | AssessmentField::Parity
            | AssessmentField::GestationalAgeWeeks
            | AssessmentField::Hemoglobin
            | AssessmentField::FetalWeight
            | AssessmentField::AmnioticFluidLevels => FieldSection::PregnancyDetails,
            AssessmentField::Diabetes | AssessmentField::Hypertension | AssessmentField::Proteinuria => {
                FieldSection::MedicalHistory
            }
        }
    }
}

impl fmt::Display for AssessmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for AssessmentField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AssessmentField::ALL
            .iter()
            .copied()
            .find(|field| field.wire_name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

/// Grouping of fields on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSection {
    PatientInformation,
    VitalSigns,
    PregnancyDetails,
    MedicalHistory,
}

/// Raw, uncoerced form input keyed by field
///
/// Numeric fields start empty and flags start at `"0"`, matching an
/// untouched form. Values stay free text until submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentForm {
    values: BTreeMap<AssessmentField, String>,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        let values = AssessmentField::ALL
            .iter()
            .map(|field| {
                let initial = if field.is_flag() { "0" } else { "" };
                (*field, initial.to_string())
            })
            .collect();
        Self { values }
    }
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text currently held for a field
    pub fn get(&self, field: AssessmentField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store raw input for a field
    pub fn set(&mut self, field: AssessmentField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Store raw input for a field addressed by wire name
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<AssessmentField, FormError> {
        let field = name.parse::<AssessmentField>()?;
        self.set(field, value);
        Ok(field)
    }

    /// Checkbox edit: checked stores `"1"`, unchecked `"0"`
    pub fn set_flag(&mut self, field: AssessmentField, checked: bool) -> Result<(), FormError> {
        if !field.is_flag() {
            return Err(FormError::NotAFlag(field.wire_name().to_string()));
        }
        self.set(field, if checked { "1" } else { "0" });
        Ok(())
    }

    /// Builder-style variant of [`AssessmentForm::set`]
    pub fn with(mut self, field: AssessmentField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields left blank
    pub fn missing_required_fields(&self) -> Vec<AssessmentField> {
        AssessmentField::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssessmentField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Patient parameters after coercion
///
/// Every numeric value is finite and every flag is 0 or 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub age: f64,
    pub age_yrs: f64,
    pub bmi: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
    pub blood_sugar: f64,
    pub pulse_pressure: f64,
    pub gravida: f64,
    pub parity: f64,
    pub gestational_age_weeks: f64,
    pub hemoglobin: f64,
    pub fetal_weight: f64,
    pub amniotic_fluid_levels: f64,
    pub diabetes: u8,
    pub hypertension: u8,
    pub proteinuria: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for field in AssessmentField::ALL {
            assert_eq!(field.wire_name().parse::<AssessmentField>().unwrap(), field);
        }
        assert_eq!(
            "Protein_Uria".parse::<AssessmentField>(),
            Err(FormError::UnknownField("Protein_Uria".to_string()))
        );
    }

    #[test]
    fn test_exactly_three_flags() {
        let flags: Vec<_> = AssessmentField::ALL.iter().filter(|f| f.is_flag()).collect();
        assert_eq!(
            flags,
            vec![&AssessmentField::Diabetes, &AssessmentField::Hypertension, &AssessmentField::Proteinuria]
        );
    }

    #[test]
    fn test_default_form_is_blank_with_unchecked_flags() {
        let form = AssessmentForm::new();
        assert_eq!(form.get(AssessmentField::Age), "");
        assert_eq!(form.get(AssessmentField::Diabetes), "0");
        assert_eq!(form.iter().count(), 18);
    }

    #[test]
    fn test_set_flag_rejects_numeric_field() {
        let mut form = AssessmentForm::new();
        assert!(form.set_flag(AssessmentField::Hypertension, true).is_ok());
        assert_eq!(form.get(AssessmentField::Hypertension), "1");
        assert_eq!(
            form.set_flag(AssessmentField::Age, true),
            Err(FormError::NotAFlag("Age".to_string()))
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let form = AssessmentForm::new()
            .with(AssessmentField::Age, "25")
            .with(AssessmentField::SystolicBp, "120")
            .with(AssessmentField::DiastolicBp, " ");
        let missing = form.missing_required_fields();
        assert!(!missing.contains(&AssessmentField::Age));
        assert!(missing.contains(&AssessmentField::DiastolicBp));
        assert!(missing.contains(&AssessmentField::PulsePressure));
        assert!(!missing.contains(&AssessmentField::Gravida));
    }

    #[test]
    fn test_form_serializes_by_wire_name() {
        let form = AssessmentForm::new().with(AssessmentField::BloodSugar, "7.2");
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["BS"], "7.2");
        assert_eq!(value["Protien_Uria"], "0");
    }
}
