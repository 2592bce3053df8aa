//! Assessment lifecycle: form, submission, result and the optional alert
//!
//! All view state lives in one serializable [`ViewState`] owned by the
//! [`AssessmentOrchestrator`] and is changed only through its named
//! transitions. The state lock is never held across a network call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use maternal_guide_data::models::{AlertAcknowledgment, PredictResponse};
use maternal_guide_data::{ApiError, PredictionApi};

use crate::entities::alert::{AlertRequest, MISSING_CONTACT_MESSAGE};
use crate::entities::assessment::{AssessmentField, AssessmentForm, AssessmentInput, FormError};
use crate::entities::conversions;
use crate::entities::notification::Notification;
use crate::entities::result::AssessmentResult;
use crate::health::{self, ConnectionStatus};
use crate::services::coercion::coerce_form;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Assessment completed successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to process assessment. Please try again.";
pub const ALERT_FAILURE_MESSAGE: &str = "Failed to send alert. Please try again.";

/// Where the submission lifecycle currently is
///
/// A failed prediction is reported through [`SubmitOutcome::Failed`] and an
/// error notification, then folds straight back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    /// Form editable, no result
    #[default]
    Idle,
    /// A predict call is in flight
    Submitting,
    /// A result is displayed and the alert action is available
    Resulted,
}

/// Everything a renderer needs to draw the assessment page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub phase: AssessmentPhase,
    pub form: AssessmentForm,
    /// Contact address for alerts, as typed
    pub contact: String,
    /// Set once a contact has been typed, never cleared within a session
    pub show_contact_instructions: bool,
    pub result: Option<AssessmentResult>,
    /// Alert busy flag, independent of the submit flow
    pub sending_alert: bool,
    pub notifications: Vec<Notification>,
    pub connection: ConnectionStatus,
    /// Page session counter; completions from an older session are dropped
    pub generation: u64,
}

impl ViewState {
    pub fn is_submitting(&self) -> bool {
        self.phase == AssessmentPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn can_send_alert(&self) -> bool {
        self.phase == AssessmentPhase::Resulted && self.result.is_some() && !self.sending_alert
    }

    /// Drop notifications older than their display time
    pub fn expire_notifications(&mut self, now: chrono::DateTime<Utc>) {
        self.notifications.retain(|notification| !notification.is_expired(now));
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Prediction received and displayed
    Resulted(AssessmentResult),
    /// Prediction failed; the state is back to Idle with no result
    Failed { message: String },
    /// A submission was already in flight, nothing was sent
    AlreadyInFlight,
    /// The page session ended before the response arrived
    Discarded,
}

/// Result of an alert trigger
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    Sent { phone_number: String },
    Failed { message: String },
    /// No contact entered, nothing was sent
    MissingContact,
    /// No displayed result to alert about, nothing was sent
    NoResult,
    /// An alert was already in flight, nothing was sent
    AlreadyInFlight,
    /// The page session ended before the response arrived
    Discarded,
}

/// Owns the submit → predict → result → optional alert sequence
pub struct AssessmentOrchestrator {
    api: Arc<dyn PredictionApi>,
    state: Mutex<ViewState>,
}

impl std::fmt::Debug for AssessmentOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentOrchestrator")
            .field("state", &*self.state())
            .finish_non_exhaustive()
    }
}

impl AssessmentOrchestrator {
    pub fn new(api: Arc<dyn PredictionApi>) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::default()),
        }
    }

    // View state is plain data, so a poisoned lock is still usable
    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current view state with expired notifications removed
    pub fn snapshot(&self) -> ViewState {
        let mut state = self.state();
        state.expire_notifications(Utc::now());
        state.clone()
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.state().phase
    }

    pub fn result(&self) -> Option<AssessmentResult> {
        self.state().result.clone()
    }

    /// Store raw input for a field; coercion waits until submission
    pub fn update_field(&self, field: AssessmentField, value: impl Into<String>) {
        self.state().form.set(field, value);
    }

    pub fn update_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<AssessmentField, FormError> {
        self.state().form.set_by_name(name, value)
    }

    /// Checkbox edit for one of the yes/no fields
    pub fn set_flag(&self, field: AssessmentField, checked: bool) -> Result<(), FormError> {
        self.state().form.set_flag(field, checked)
    }

    /// Replace the whole form, e.g. when restoring a draft
    pub fn replace_form(&self, form: AssessmentForm) {
        self.state().form = form;
    }

    pub fn set_contact(&self, contact: impl Into<String>) {
        let contact = contact.into();
        let mut state = self.state();
        if !contact.is_empty() {
            state.show_contact_instructions = true;
        }
        state.contact = contact;
    }

    /// Remove a notification before it expires
    pub fn dismiss_notification(&self, id: Uuid) -> bool {
        let mut state = self.state();
        let before = state.notifications.len();
        state.notifications.retain(|notification| notification.id != id);
        state.notifications.len() != before
    }

    /// Submit the form for prediction
    ///
    /// Single-flight: a trigger while a prediction is in flight sends nothing.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some((generation, input)) = self.begin_submission() else {
            debug!("Submission already in flight - ignoring trigger");
            return SubmitOutcome::AlreadyInFlight;
        };

        let request = conversions::convert_to_data_predict_request(&input);
        let response = self.api.predict(&request).await;

        self.finish_submission(generation, response)
    }

    fn begin_submission(&self) -> Option<(u64, AssessmentInput)> {
        let mut state = self.state();
        if state.is_submitting() {
            return None;
        }

        let missing = state.form.missing_required_fields();
        if !missing.is_empty() {
            debug!("Submitting with blank required fields (sent as 0): {:?}", missing);
        }

        state.phase = AssessmentPhase::Submitting;
        info!(generation = state.generation, "Assessment submitted");
        Some((state.generation, coerce_form(&state.form)))
    }

    fn finish_submission(
        &self,
        generation: u64,
        response: Result<PredictResponse, ApiError>,
    ) -> SubmitOutcome {
        let mut state = self.state();
        if state.generation != generation {
            warn!("Discarding prediction for an abandoned session");
            return SubmitOutcome::Discarded;
        }

        match response {
            Ok(response) => {
                let result = conversions::convert_to_domain_result(response, Utc::now());
                info!(risk_level = %result.risk_level, "Assessment resulted");
                state.result = Some(result.clone());
                state.phase = AssessmentPhase::Resulted;
                state.notify(Notification::success(SUBMIT_SUCCESS_MESSAGE));
                SubmitOutcome::Resulted(result)
            }
            Err(e) => {
                error!("Prediction error: {}", e);
                state.result = None;
                state.phase = AssessmentPhase::Idle;
                state.notify(Notification::error(SUBMIT_FAILURE_MESSAGE));
                SubmitOutcome::Failed { message: e.to_string() }
            }
        }
    }

    /// Send an alert for the displayed risk level to the entered contact
    ///
    /// The displayed result is never changed by this call, whatever its outcome.
    #[instrument(skip(self))]
    pub async fn send_alert(&self) -> AlertOutcome {
        let (generation, request) = match self.begin_alert() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        let wire = conversions::convert_to_data_alert_request(&request);
        let response = self.api.send_alert(&wire).await;

        self.finish_alert(generation, &request, response)
    }

    fn begin_alert(&self) -> Result<(u64, AlertRequest), AlertOutcome> {
        let mut state = self.state();

        let risk_level = match (state.phase, &state.result) {
            (AssessmentPhase::Resulted, Some(result)) => result.risk_level.clone(),
            _ => {
                debug!("No result to alert about");
                return Err(AlertOutcome::NoResult);
            }
        };

        if state.sending_alert {
            debug!("Alert already in flight - ignoring trigger");
            return Err(AlertOutcome::AlreadyInFlight);
        }

        let request = AlertRequest::new(risk_level, &state.contact);
        if let Err(errors) = request.validate() {
            warn!("Alert not sent: {}", errors);
            state.notify(Notification::error(MISSING_CONTACT_MESSAGE));
            return Err(AlertOutcome::MissingContact);
        }

        state.sending_alert = true;
        info!(risk_level = %request.risk_level, "Sending alert");
        Ok((state.generation, request))
    }

    fn finish_alert(
        &self,
        generation: u64,
        request: &AlertRequest,
        response: Result<AlertAcknowledgment, ApiError>,
    ) -> AlertOutcome {
        let mut state = self.state();
        if state.generation != generation {
            warn!("Discarding alert acknowledgment for an abandoned session");
            return AlertOutcome::Discarded;
        }

        state.sending_alert = false;
        match response {
            Ok(_) => {
                info!("Alert delivered");
                state.notify(Notification::success(format!(
                    "Alert sent successfully to {}!",
                    request.phone_number
                )));
                AlertOutcome::Sent {
                    phone_number: request.phone_number.clone(),
                }
            }
            Err(e) => {
                error!("Alert error: {}", e);
                state.notify(Notification::error(ALERT_FAILURE_MESSAGE));
                AlertOutcome::Failed { message: e.to_string() }
            }
        }
    }

    /// Probe the backend and record the connectivity indicator
    #[instrument(skip(self))]
    pub async fn check_connection(&self) -> ConnectionStatus {
        let generation = self.state().generation;
        let status = health::check_connection(self.api.as_ref()).await;

        let mut state = self.state();
        if state.generation == generation {
            state.connection = status.clone();
        }
        status
    }

    /// End the page session
    ///
    /// Resets the form, result and busy flags; any response still in flight
    /// is discarded when it arrives. The connectivity indicator is kept.
    pub fn leave(&self) {
        let mut state = self.state();
        let generation = state.generation + 1;
        let connection = state.connection.clone();
        *state = ViewState {
            generation,
            connection,
            ..ViewState::default()
        };
        info!(generation, "Assessment session reset");
    }
}
