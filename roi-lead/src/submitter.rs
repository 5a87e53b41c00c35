//! Submit flow for the lead form.
//!
//! | Situation                      | Result                                      |
//! |--------------------------------|---------------------------------------------|
//! | a field fails validation       | `Err(Validation)`, nothing sent             |
//! | honeypot filled                | `Ok(SpamDiscarded)`, nothing sent           |
//! | no webhook configured          | `Ok(NotConfigured)`, payload logged         |
//! | webhook answers 2xx            | `Ok(Delivered)`                             |
//! | network error or non-2xx       | `Err(Transport)`, submit control re-enabled |
//!
//! The visitor sees success for the first three `Ok` cases alike.

use std::sync::{Arc, Mutex, PoisonError};

use roi_core::{EstimatorError, EstimatorInput, SavingsCalculator};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::contact::{ContactDetails, ValidatedContact, ValidationError, ValidationRules};
use crate::payload::{LeadSubmission, build_submission_payload};
use crate::sink::{LeadSink, TransportError, WebhookConfig};

/// Message shown when delivery fails.
pub const RETRY_MESSAGE: &str =
    "There was an error submitting your information. Please try again or contact us directly.";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("estimate could not be computed: {0}")]
    Estimate(#[from] EstimatorError),

    #[error("lead delivery failed: {0}")]
    Transport(#[from] TransportError),
}

impl SubmissionError {
    /// Text for the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(err) => err.to_string(),
            SubmissionError::Estimate(_) | SubmissionError::Transport(_) => {
                RETRY_MESSAGE.to_string()
            }
        }
    }
}

/// Successful submit outcomes. All three show the success state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered(LeadSubmission),
    /// Honeypot was filled. Nothing was built or sent.
    SpamDiscarded,
    /// No destination configured; the payload was logged instead.
    NotConfigured(LeadSubmission),
}

/// State of the submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Ready,
    Submitting,
    Succeeded,
    Failed { message: String },
}

impl SubmitState {
    /// The control is disabled only while a request is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        !matches!(self, SubmitState::Submitting)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitState::Submitting => "Submitting...",
            _ => "Submit",
        }
    }
}

/// Read side of a submitter's [`SubmitState`], for whatever renders the
/// submit control. Reflects `Submitting` while a request is in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmitStateHandle(Arc<Mutex<SubmitState>>);

impl SubmitStateHandle {
    pub fn current(&self) -> SubmitState {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(
        &self,
        state: SubmitState,
    ) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

pub struct LeadSubmitter {
    sink: Option<Box<dyn LeadSink>>,
    rules: ValidationRules,
    page_url: String,
    state: SubmitStateHandle,
}

impl LeadSubmitter {
    pub fn new(
        sink: Option<Box<dyn LeadSink>>,
        rules: ValidationRules,
        page_url: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            rules,
            page_url: page_url.into(),
            state: SubmitStateHandle::default(),
        }
    }

    pub fn from_config(
        config: &WebhookConfig,
        rules: ValidationRules,
        page_url: impl Into<String>,
    ) -> Self {
        Self::new(config.build_sink(), rules, page_url)
    }

    pub fn state(&self) -> SubmitState {
        self.state.current()
    }

    /// A handle that keeps observing this submitter's state, including
    /// while [`submit`](Self::submit) is awaiting the webhook.
    pub fn state_handle(&self) -> SubmitStateHandle {
        self.state.clone()
    }

    /// Runs one submit. Takes `&mut self`, so a second submit cannot start
    /// on this submitter while one is awaiting the webhook.
    pub async fn submit(
        &mut self,
        calculator: &SavingsCalculator,
        input: &EstimatorInput,
        contact: &ContactDetails,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let validated = match contact.validate(self.rules) {
            Ok(validated) => validated,
            Err(err) => {
                debug!(error = %err, "lead form failed validation");
                self.state.set(SubmitState::Failed {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };

        if validated.honeypot_filled {
            debug!("honeypot filled, discarding lead");
            self.state.set(SubmitState::Succeeded);
            return Ok(SubmissionOutcome::SpamDiscarded);
        }

        self.state.set(SubmitState::Submitting);
        let result = self.deliver(calculator, input, &validated).await;

        self.state.set(match &result {
            Ok(_) => SubmitState::Succeeded,
            Err(err) => SubmitState::Failed {
                message: err.user_message(),
            },
        });
        result
    }

    async fn deliver(
        &self,
        calculator: &SavingsCalculator,
        input: &EstimatorInput,
        validated: &ValidatedContact,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let submission = build_submission_payload(calculator, input, validated, &self.page_url)?;

        let Some(sink) = &self.sink else {
            match serde_json::to_string(&submission) {
                Ok(payload) => warn!(%payload, "lead webhook not configured, payload not sent"),
                Err(err) => warn!(
                    ?submission,
                    error = %err,
                    "lead webhook not configured, payload not sent"
                ),
            }
            return Ok(SubmissionOutcome::NotConfigured(submission));
        };

        match sink.deliver(&submission).await {
            Ok(()) => {
                info!(sink = sink.name(), company = %submission.company, "lead delivered");
                Ok(SubmissionOutcome::Delivered(submission))
            }
            Err(err) => {
                error!(sink = sink.name(), error = %err, "lead delivery failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::sink::LEGACY_PLACEHOLDER_WEBHOOK_URL;

    /// Records deliveries, and the submit state seen mid-flight, and answers
    /// with a fixed result.
    struct RecordingSink {
        delivered: Arc<Mutex<Vec<LeadSubmission>>>,
        fail_with: Option<u16>,
        observer: Option<(SubmitStateHandle, Arc<Mutex<Vec<SubmitState>>>)>,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(
            &self,
            submission: &LeadSubmission,
        ) -> Result<(), TransportError> {
            self.delivered.lock().unwrap().push(submission.clone());
            if let Some((handle, seen)) = &self.observer {
                seen.lock().unwrap().push(handle.current());
            }
            match self.fail_with {
                Some(status) => Err(TransportError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn recording_submitter(
        fail_with: Option<u16>
    ) -> (LeadSubmitter, Arc<Mutex<Vec<LeadSubmission>>>) {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            delivered: delivered.clone(),
            fail_with,
            observer: None,
        };
        let submitter = LeadSubmitter::new(
            Some(Box::new(sink)),
            ValidationRules::default(),
            "https://example.com/roi",
        );
        (submitter, delivered)
    }

    fn test_contact() -> ContactDetails {
        ContactDetails {
            full_name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
            company: "Northwind Logistics".to_string(),
            website: String::new(),
        }
    }

    #[tokio::test]
    async fn submit_delivers_valid_lead() {
        let (mut submitter, delivered) = recording_submitter(None);

        let outcome = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &test_contact(),
            )
            .await
            .unwrap();

        let sent = delivered.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].monthly_hours_saved, dec!(21.65));
        assert_eq!(outcome, SubmissionOutcome::Delivered(sent[0].clone()));
        assert_eq!(submitter.state(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn submit_discards_honeypot_without_sending() {
        let (mut submitter, delivered) = recording_submitter(None);
        let contact = ContactDetails {
            website: "spam.example".to_string(),
            ..test_contact()
        };

        let outcome = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &contact,
            )
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::SpamDiscarded);
        assert!(delivered.lock().unwrap().is_empty());
        assert_eq!(submitter.state(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn submit_rejects_bad_email_without_sending() {
        let (mut submitter, delivered) = recording_submitter(None);
        let contact = ContactDetails {
            email: "not-an-email".to_string(),
            ..test_contact()
        };

        let result = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &contact,
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmissionError::Validation(ValidationError::InvalidEmail))
        ));
        assert!(delivered.lock().unwrap().is_empty());
        assert!(submitter.state().is_submit_enabled());
    }

    #[tokio::test]
    async fn submit_reports_transport_failure_and_reenables_control() {
        let (mut submitter, delivered) = recording_submitter(Some(500));

        let result = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &test_contact(),
            )
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Transport(TransportError::Status(500))
        ));
        assert_eq!(err.user_message(), RETRY_MESSAGE);
        assert_eq!(delivered.lock().unwrap().len(), 1);
        assert_eq!(
            submitter.state(),
            SubmitState::Failed {
                message: RETRY_MESSAGE.to_string()
            }
        );
        assert!(submitter.state().is_submit_enabled());
    }

    #[tokio::test]
    async fn submit_can_retry_after_failure() {
        let (mut submitter, delivered) = recording_submitter(Some(503));
        let calculator = SavingsCalculator::default();
        let input = EstimatorInput::default();

        let _ = submitter.submit(&calculator, &input, &test_contact()).await;
        let _ = submitter.submit(&calculator, &input, &test_contact()).await;

        assert_eq!(delivered.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn submit_without_sink_reports_not_configured() {
        let mut submitter = LeadSubmitter::from_config(
            &WebhookConfig::default(),
            ValidationRules::default(),
            "https://example.com/roi",
        );

        let outcome = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &test_contact(),
            )
            .await
            .unwrap();

        match outcome {
            SubmissionOutcome::NotConfigured(submission) => {
                assert_eq!(submission.page_url, "https://example.com/roi");
            }
            other => panic!("expected NotConfigured, got {other:?}"),
        }
        assert_eq!(submitter.state(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn state_handle_sees_submitting_while_request_is_in_flight() {
        let state = SubmitStateHandle::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            delivered: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            observer: Some((state.clone(), seen.clone())),
        };
        let mut submitter = LeadSubmitter {
            state,
            ..LeadSubmitter::new(
                Some(Box::new(sink)),
                ValidationRules::default(),
                "https://example.com/roi",
            )
        };
        let handle = submitter.state_handle();
        assert_eq!(handle.current(), SubmitState::Ready);

        submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &test_contact(),
            )
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![SubmitState::Submitting]);
        assert!(!seen[0].is_submit_enabled());
        assert_eq!(handle.current(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn submit_with_widget_placeholder_url_reports_not_configured() {
        let mut submitter = LeadSubmitter::from_config(
            &WebhookConfig::new(LEGACY_PLACEHOLDER_WEBHOOK_URL),
            ValidationRules::default(),
            "https://example.com/roi",
        );

        let outcome = submitter
            .submit(
                &SavingsCalculator::default(),
                &EstimatorInput::default(),
                &test_contact(),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, SubmissionOutcome::NotConfigured(_)));
        assert_eq!(submitter.state(), SubmitState::Succeeded);
    }

    #[test]
    fn submit_state_disables_control_only_while_submitting() {
        assert!(SubmitState::Ready.is_submit_enabled());
        assert!(!SubmitState::Submitting.is_submit_enabled());
        assert_eq!(SubmitState::Submitting.button_label(), "Submitting...");
        assert!(SubmitState::Succeeded.is_submit_enabled());
        assert_eq!(SubmitState::Ready.button_label(), "Submit");
    }
}
