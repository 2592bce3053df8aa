// Conversion functions between domain entities and public entities

use maternal_guide_domain::entities::alert::contact_instructions;
use maternal_guide_domain::entities::{
    AssessmentField, AssessmentResult, FieldSection, Notification, NotificationKind, RiskSeverity,
};
use maternal_guide_domain::{AssessmentPhase, ConnectionStatus, ViewState};

use super::assessment::{
    FieldDescriptor, PublicAssessmentResult, PublicConnectionStatus, PublicNotification,
    PublicViewState,
};

fn phase_name(phase: AssessmentPhase) -> &'static str {
    match phase {
        AssessmentPhase::Idle => "idle",
        AssessmentPhase::Submitting => "submitting",
        AssessmentPhase::Resulted => "resulted",
    }
}

fn severity_name(severity: RiskSeverity) -> &'static str {
    match severity {
        RiskSeverity::Danger => "danger",
        RiskSeverity::Warning => "warning",
        RiskSeverity::Safe => "safe",
        RiskSeverity::Neutral => "neutral",
    }
}

fn section_name(section: FieldSection) -> &'static str {
    match section {
        FieldSection::PatientInformation => "patient_information",
        FieldSection::VitalSigns => "vital_signs",
        FieldSection::PregnancyDetails => "pregnancy_details",
        FieldSection::MedicalHistory => "medical_history",
    }
}

/// Convert a domain result to a public result
pub fn convert_to_public_result(result: &AssessmentResult) -> PublicAssessmentResult {
    PublicAssessmentResult {
        risk_level: result.risk_level.as_str().to_string(),
        severity: severity_name(result.severity()).to_string(),
        disease_status: result.disease_status.clone(),
        disease_probability: result.disease_probability.clone(),
        advice: result.advice.clone(),
        received_at: result.received_at,
    }
}

pub fn convert_to_public_notification(notification: &Notification) -> PublicNotification {
    let kind = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };

    PublicNotification {
        id: notification.id,
        kind: kind.to_string(),
        message: notification.message.clone(),
        created_at: notification.created_at,
    }
}

pub fn convert_to_public_connection(status: &ConnectionStatus) -> PublicConnectionStatus {
    let (state, detail) = match status {
        ConnectionStatus::Checking => ("checking", None),
        ConnectionStatus::Connected { status } => ("connected", Some(status.clone())),
        ConnectionStatus::Disconnected { error } => ("disconnected", Some(error.clone())),
    };

    PublicConnectionStatus {
        state: state.to_string(),
        connected: status.is_connected(),
        detail,
        summary: status.summary(),
    }
}

/// Convert a domain view state snapshot to its public form
pub fn convert_to_public_view_state(state: &ViewState) -> PublicViewState {
    let form = state
        .form
        .iter()
        .map(|(field, value)| (field.wire_name().to_string(), value.to_string()))
        .collect();

    let missing_required_fields = state
        .form
        .missing_required_fields()
        .into_iter()
        .map(|field| field.wire_name().to_string())
        .collect();

    let contact_instructions = if state.show_contact_instructions {
        contact_instructions()
    } else {
        Vec::new()
    };

    PublicViewState {
        phase: phase_name(state.phase).to_string(),
        form,
        missing_required_fields,
        contact: state.contact.clone(),
        show_contact_instructions: state.show_contact_instructions,
        contact_instructions,
        result: state.result.as_ref().map(convert_to_public_result),
        can_submit: state.can_submit(),
        can_send_alert: state.can_send_alert(),
        sending_alert: state.sending_alert,
        notifications: state
            .notifications
            .iter()
            .map(convert_to_public_notification)
            .collect(),
        connection: convert_to_public_connection(&state.connection),
    }
}

pub fn convert_to_field_descriptor(field: AssessmentField) -> FieldDescriptor {
    FieldDescriptor {
        name: field.wire_name().to_string(),
        label: field.label().to_string(),
        unit: field.unit().map(str::to_string),
        placeholder: field.placeholder().map(str::to_string),
        section: section_name(field.section()).to_string(),
        flag: field.is_flag(),
        required: field.is_required(),
    }
}
