use std::collections::HashMap;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use maternal_guide_domain::entities::alert::MISSING_CONTACT_MESSAGE;
use maternal_guide_domain::entities::{AssessmentField, FormError};
use maternal_guide_domain::services::orchestrator::{ALERT_FAILURE_MESSAGE, SUBMIT_FAILURE_MESSAGE};
use maternal_guide_domain::{AlertOutcome, SubmitOutcome};

use super::AppState;
use crate::entities::assessment::{
    AlertResponse, ContactUpdateRequest, FieldDescriptor, FormUpdateRequest, PublicViewState,
    SubmitResponse,
};
use crate::entities::common::ErrorResponse;
use crate::entities::conversions::{
    convert_to_field_descriptor, convert_to_public_result, convert_to_public_view_state,
};

fn current_view(orchestrator: &AppState) -> PublicViewState {
    convert_to_public_view_state(&orchestrator.snapshot())
}

/// Current view state of the assessment page
#[utoipa::path(
    get,
    path = "/assessment",
    responses(
        (status = 200, description = "Current view state", body = PublicViewState)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator))]
pub async fn get_assessment(State(orchestrator): State<AppState>) -> Json<PublicViewState> {
    Json(current_view(&orchestrator))
}

/// Catalogue of form fields in display order
#[utoipa::path(
    get,
    path = "/assessment/fields",
    responses(
        (status = 200, description = "Form fields", body = [FieldDescriptor])
    ),
    tag = "assessment"
)]
pub async fn get_fields() -> Json<Vec<FieldDescriptor>> {
    Json(
        AssessmentField::ALL
            .iter()
            .copied()
            .map(convert_to_field_descriptor)
            .collect(),
    )
}

enum FieldEdit {
    Text(AssessmentField, String),
    Flag(AssessmentField, bool),
}

/// Resolve every entry of a form update before any of it is applied
fn parse_edits(fields: HashMap<String, Value>) -> Result<Vec<FieldEdit>, ErrorResponse> {
    let mut edits = Vec::with_capacity(fields.len());
    let mut rejected = serde_json::Map::new();

    for (name, value) in fields {
        let field = match name.parse::<AssessmentField>() {
            Ok(field) => field,
            Err(e) => {
                rejected.insert(name, json!(e.to_string()));
                continue;
            }
        };

        match value {
            Value::String(text) => edits.push(FieldEdit::Text(field, text)),
            Value::Number(number) => edits.push(FieldEdit::Text(field, number.to_string())),
            Value::Null => edits.push(FieldEdit::Text(field, String::new())),
            Value::Bool(checked) if field.is_flag() => edits.push(FieldEdit::Flag(field, checked)),
            Value::Bool(_) => {
                let e = FormError::NotAFlag(name.clone());
                rejected.insert(name, json!(e.to_string()));
            }
            Value::Array(_) | Value::Object(_) => {
                rejected.insert(name, json!("Expected a string, number, boolean or null"));
            }
        }
    }

    if rejected.is_empty() {
        Ok(edits)
    } else {
        warn!("Rejected form update: {:?}", rejected);
        Err(ErrorResponse::validation_error(
            "Invalid form update",
            Some(Value::Object(rejected)),
        ))
    }
}

/// Update form fields by wire name
///
/// Values are stored as raw text and only coerced on submission.
#[utoipa::path(
    put,
    path = "/assessment/form",
    request_body = FormUpdateRequest,
    responses(
        (status = 200, description = "Form updated", body = PublicViewState),
        (status = 422, description = "Unknown field or unsupported value", body = ErrorResponse)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator, request))]
pub async fn update_form(
    State(orchestrator): State<AppState>,
    Json(request): Json<FormUpdateRequest>,
) -> Result<Json<PublicViewState>, ErrorResponse> {
    let edits = parse_edits(request.fields)?;

    for edit in edits {
        match edit {
            FieldEdit::Text(field, text) => orchestrator.update_field(field, text),
            FieldEdit::Flag(field, checked) => orchestrator
                .set_flag(field, checked)
                .map_err(|e| ErrorResponse::validation_error(e.to_string(), None))?,
        }
    }

    Ok(Json(current_view(&orchestrator)))
}

/// Set the contact address alerts are sent to
#[utoipa::path(
    put,
    path = "/assessment/contact",
    request_body = ContactUpdateRequest,
    responses(
        (status = 200, description = "Contact updated", body = PublicViewState)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator, request))]
pub async fn update_contact(
    State(orchestrator): State<AppState>,
    Json(request): Json<ContactUpdateRequest>,
) -> Json<PublicViewState> {
    orchestrator.set_contact(request.contact);
    Json(current_view(&orchestrator))
}

/// Submit the form for a risk prediction
#[utoipa::path(
    post,
    path = "/assessment/submit",
    responses(
        (status = 200, description = "Prediction received", body = SubmitResponse),
        (status = 409, description = "A submission is already in flight or the session was reset", body = ErrorResponse),
        (status = 502, description = "Prediction backend failed", body = ErrorResponse)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator))]
pub async fn submit_assessment(
    State(orchestrator): State<AppState>,
) -> Result<Json<SubmitResponse>, ErrorResponse> {
    match orchestrator.submit().await {
        SubmitOutcome::Resulted(result) => {
            info!("Submission resulted in {}", result.risk_level);
            Ok(Json(SubmitResponse {
                result: convert_to_public_result(&result),
                view: current_view(&orchestrator),
            }))
        }
        SubmitOutcome::Failed { message } => {
            Err(ErrorResponse::upstream_error(SUBMIT_FAILURE_MESSAGE, message))
        }
        SubmitOutcome::AlreadyInFlight => Err(ErrorResponse::conflict(
            "An assessment is already being processed",
        )),
        SubmitOutcome::Discarded => Err(ErrorResponse::conflict(
            "The assessment was reset before the prediction arrived",
        )),
    }
}

/// Send an alert for the displayed risk level
#[utoipa::path(
    post,
    path = "/assessment/alert",
    responses(
        (status = 200, description = "Alert delivered", body = AlertResponse),
        (status = 409, description = "No result, alert already in flight, or session reset", body = ErrorResponse),
        (status = 422, description = "No contact entered", body = ErrorResponse),
        (status = 502, description = "Alert backend failed", body = ErrorResponse)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator))]
pub async fn send_alert(
    State(orchestrator): State<AppState>,
) -> Result<Json<AlertResponse>, ErrorResponse> {
    match orchestrator.send_alert().await {
        AlertOutcome::Sent { phone_number } => Ok(Json(AlertResponse {
            phone_number,
            view: current_view(&orchestrator),
        })),
        AlertOutcome::MissingContact => Err(ErrorResponse::validation_error(
            MISSING_CONTACT_MESSAGE,
            Some(json!({ "contact": "must not be empty" })),
        )),
        AlertOutcome::Failed { message } => {
            Err(ErrorResponse::upstream_error(ALERT_FAILURE_MESSAGE, message))
        }
        AlertOutcome::NoResult => Err(ErrorResponse::conflict(
            "There is no assessment result to send an alert for",
        )),
        AlertOutcome::AlreadyInFlight => Err(ErrorResponse::conflict("An alert is already being sent")),
        AlertOutcome::Discarded => Err(ErrorResponse::conflict(
            "The assessment was reset before the alert completed",
        )),
    }
}

/// Dismiss a notification before it expires
#[utoipa::path(
    delete,
    path = "/assessment/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification dismissed"),
        (status = 404, description = "No such notification", body = ErrorResponse)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator))]
pub async fn dismiss_notification(
    State(orchestrator): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    if orchestrator.dismiss_notification(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ErrorResponse::not_found("notification"))
    }
}

/// Leave the assessment page, resetting the session
///
/// Responses still in flight are discarded when they arrive.
#[utoipa::path(
    post,
    path = "/assessment/leave",
    responses(
        (status = 200, description = "Session reset", body = PublicViewState)
    ),
    tag = "assessment"
)]
#[instrument(skip(orchestrator))]
pub async fn leave_assessment(State(orchestrator): State<AppState>) -> Json<PublicViewState> {
    orchestrator.leave();
    Json(current_view(&orchestrator))
}
