//! Lead capture for the ROI estimator: contact validation, payload assembly
//! and delivery to a webhook.

pub mod contact;
pub mod payload;
pub mod sink;
pub mod submitter;

pub use contact::{ContactDetails, ValidatedContact, ValidationError, ValidationRules};
pub use payload::{LeadSubmission, build_submission_payload, build_submission_payload_at};
pub use sink::{
    LEGACY_PLACEHOLDER_WEBHOOK_URL, LeadSink, PLACEHOLDER_WEBHOOK_URL, TransportError, WebhookConfig,
    WebhookSink,
};
pub use submitter::{
    LeadSubmitter, RETRY_MESSAGE, SubmissionError, SubmissionOutcome, SubmitState, SubmitStateHandle,
};
