//! Soil-and-climate measurements to crop recommendation controller.

use crate::error::{FlowError, GenerateError};
use crate::models::{FieldName, InputParameters};
use crate::notification::Notification;
use crate::prompt::RecommendationRequest;
use crate::service::GenerativeTextService;
use crate::status::SubmissionStatus;
use std::str::FromStr;

/// Shown in place of the recommendation whenever generation fails.
pub const FALLBACK_RESPONSE: &str = "An error occurred while fetching recommendations.";

pub const GENERATING_MESSAGE: &str = "Generating recommendations...";
pub const SUCCESS_MESSAGE: &str = "Recommendations generated successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to generate recommendations";

#[derive(Debug, Default)]
pub struct ParameterSubmissionFlow {
    inputs: InputParameters,
    status: SubmissionStatus,
    response_text: Option<String>,
    notifications: Vec<Notification>,
}

impl ParameterSubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn response_text(&self) -> Option<&str> {
        self.response_text.as_deref()
    }

    /// Stores `value` verbatim under the form field called `name`.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FlowError> {
        let field =
            FieldName::from_str(name).map_err(|_| FlowError::UnknownField(name.to_string()))?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.inputs.set(field, value.into());
        if self.status == SubmissionStatus::Failed {
            self.response_text = None;
        }
    }

    /// Validates the form and moves to `InFlight`, returning the request to send.
    ///
    /// Every successful call must be paired with exactly one [`finish`](Self::finish).
    pub fn begin_submit(&mut self) -> Result<RecommendationRequest, FlowError> {
        if self.status.is_in_flight() {
            return Err(FlowError::AlreadyInFlight);
        }
        if let Some(field) = self.inputs.first_missing() {
            return Err(FlowError::MissingField(field));
        }

        self.status = SubmissionStatus::InFlight;
        self.response_text = None;
        self.notifications.push(Notification::info(GENERATING_MESSAGE));
        Ok(RecommendationRequest::from_inputs(&self.inputs))
    }

    pub fn finish(&mut self, outcome: Result<String, GenerateError>) {
        if !self.status.is_in_flight() {
            log::warn!("Ignoring recommendation outcome, nothing in flight");
            return;
        }

        match outcome {
            Ok(text) => {
                self.response_text = Some(text);
                self.status = SubmissionStatus::Succeeded;
                self.notifications.push(Notification::success(SUCCESS_MESSAGE));
            }
            Err(err) => {
                // The user only ever sees the fixed fallback.
                log::error!("Recommendation request failed: {}", err);
                self.response_text = Some(FALLBACK_RESPONSE.to_string());
                self.status = SubmissionStatus::Failed;
                self.notifications.push(Notification::error(FAILURE_MESSAGE));
            }
        }
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<(), FlowError>
    where
        S: GenerativeTextService + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = service.generate(&request).await;
        self.finish(outcome);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inputs = InputParameters::default();
        self.response_text = None;
    }

    /// Drains pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
