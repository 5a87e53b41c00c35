//! Adapter between command-line input and the estimator core.
//!
//! Each command-line override is fed to the estimator the same way a slider
//! change would be, one [`InputChange`] at a time.

use roi_core::{
    DerivedMetrics, EstimatorError, EstimatorState, InputChange, ReachComparison, ReachDisplay,
};
use roi_lead::{ContactDetails, LeadSubmitter, SubmissionError, SubmissionOutcome};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::AppConfig;

/// Message shown once a lead is accepted, whether or not it was sent.
pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";

/// Slider overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub managers: Option<i32>,
    pub hours_saved_per_week: Option<Decimal>,
    pub hourly_cost: Option<Decimal>,
    pub employee_tier: Option<u8>,
}

impl InputOverrides {
    /// The overrides as changes, in slider order.
    pub fn changes(&self) -> Vec<InputChange> {
        [
            self.managers.map(InputChange::Managers),
            self.hours_saved_per_week.map(InputChange::BaseHours),
            self.hourly_cost.map(InputChange::HourlyCost),
            self.employee_tier.map(InputChange::Tier),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Builds the estimator from the configured defaults and applies the
/// overrides. Returns the state and the metrics after the last change.
pub fn build_state(
    config: &AppConfig,
    overrides: &InputOverrides,
) -> Result<(EstimatorState, DerivedMetrics), EstimatorError> {
    let mut state = EstimatorState::new(config.defaults.clone(), config.policy.clone());
    let mut derived = state.on_input_changed()?;
    for change in overrides.changes() {
        derived = state.apply(change)?;
    }
    debug!(input = ?state.input(), "estimator ready");
    Ok((state, derived))
}

pub fn render_reach(
    traditional_reach: Decimal,
    text_first_reach: Decimal,
) -> Result<ReachDisplay, EstimatorError> {
    let delta = ReachComparison::new(traditional_reach, text_first_reach).compare()?;
    Ok(ReachDisplay::render(&delta))
}

/// What the form shows after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub succeeded: bool,
    pub message: String,
}

/// Submits a lead for the current estimator state.
pub async fn submit_lead(
    config: &AppConfig,
    state: &EstimatorState,
    contact: &ContactDetails,
) -> SubmitReport {
    let mut submitter =
        LeadSubmitter::from_config(&config.webhook, config.lead_form, config.page_url.clone());

    let result = submitter
        .submit(state.calculator(), state.input(), contact)
        .await;
    report(result)
}

fn report(result: Result<SubmissionOutcome, SubmissionError>) -> SubmitReport {
    match result {
        Ok(outcome) => {
            let kind = match outcome {
                SubmissionOutcome::Delivered(_) => "delivered",
                SubmissionOutcome::SpamDiscarded => "discarded",
                SubmissionOutcome::NotConfigured(_) => "not configured",
            };
            info!(outcome = kind, "lead submission finished");
            SubmitReport {
                succeeded: true,
                message: SUCCESS_MESSAGE.to_string(),
            }
        }
        Err(err) => SubmitReport {
            succeeded: false,
            message: err.user_message(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roi_core::InvalidInput;
    use roi_lead::RETRY_MESSAGE;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_contact() -> ContactDetails {
        ContactDetails {
            full_name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
            company: "Northwind Logistics".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn changes_skip_missing_overrides() {
        let overrides = InputOverrides {
            managers: Some(8),
            employee_tier: Some(4),
            ..Default::default()
        };

        assert_eq!(
            overrides.changes(),
            vec![InputChange::Managers(8), InputChange::Tier(4)]
        );
    }

    #[test]
    fn build_state_without_overrides_uses_defaults() {
        let (state, derived) = build_state(&AppConfig::default(), &InputOverrides::default()).unwrap();

        assert_eq!(state.input().manager_count, 5);
        assert_eq!(derived.display.monthly_cost_saved, "$1.1K");
    }

    #[test]
    fn build_state_applies_overrides() {
        let overrides = InputOverrides {
            managers: Some(20),
            hours_saved_per_week: Some(dec!(2.5)),
            hourly_cost: Some(dec!(65)),
            employee_tier: Some(5),
        };

        let (_, derived) = build_state(&AppConfig::default(), &overrides).unwrap();

        // 20 × (2.5 + 0.4) × 4.33 = 251.14
        assert_eq!(derived.savings.hours, dec!(251.14));
        assert_eq!(derived.display.monthly_hours_saved, "251.1");
        assert_eq!(derived.display.monthly_cost_saved, "$16.3K");
    }

    #[test]
    fn build_state_rejects_bad_override() {
        let overrides = InputOverrides {
            employee_tier: Some(7),
            ..Default::default()
        };

        let result = build_state(&AppConfig::default(), &overrides);

        assert!(matches!(
            result,
            Err(EstimatorError::InvalidInput(InvalidInput::TierOutOfRange(7)))
        ));
    }

    #[test]
    fn render_reach_handles_zero_baseline() {
        let display = render_reach(Decimal::ZERO, dec!(90)).unwrap();

        assert_eq!(display.multiplier, "N/A");
        assert_eq!(display.point_delta, "+90 pts");
    }

    #[tokio::test]
    async fn submit_lead_without_webhook_reports_success() {
        let config = AppConfig::default();
        let (state, _) = build_state(&config, &InputOverrides::default()).unwrap();

        let report = submit_lead(&config, &state, &test_contact()).await;

        assert_eq!(
            report,
            SubmitReport {
                succeeded: true,
                message: SUCCESS_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn submit_lead_reports_validation_message() {
        let config = AppConfig::default();
        let (state, _) = build_state(&config, &InputOverrides::default()).unwrap();
        let contact = ContactDetails {
            email: "not-an-email".to_string(),
            ..test_contact()
        };

        let report = submit_lead(&config, &state, &contact).await;

        assert!(!report.succeeded);
        assert_eq!(report.message, "Please enter a valid email address.");
    }

    #[test]
    fn report_maps_transport_failure_to_retry_message() {
        let result = Err(SubmissionError::Transport(
            roi_lead::TransportError::Status(502),
        ));

        let report = report(result);

        assert!(!report.succeeded);
        assert_eq!(report.message, RETRY_MESSAGE);
    }
}
