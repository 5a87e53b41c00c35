//! The record forwarded to the lead webhook.

use chrono::{DateTime, SecondsFormat, Utc};
use roi_core::calculations::common::round_half_up;
use roi_core::{EstimatorError, EstimatorInput, SavingsCalculator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contact::ValidatedContact;

/// A lead as it is sent to the webhook. Built once per submit and never
/// modified afterwards.
///
/// Serializes to camelCase JSON with every numeric field as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    #[serde(rename = "mobile", skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    pub company: String,

    /// Size bucket label, e.g. `"100-500"`.
    pub employee_tier: String,
    pub employee_count_tier: u8,

    #[serde(rename = "managers")]
    pub manager_count: i32,
    #[serde(
        rename = "baseHoursSavedPerManagerPerWeek",
        with = "rust_decimal::serde::float"
    )]
    pub base_hours_saved_per_week: Decimal,
    #[serde(rename = "hourlyManagerCost", with = "rust_decimal::serde::float")]
    pub hourly_cost: Decimal,

    /// Rounded to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_hours_saved: Decimal,
    /// Rounded to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_cost_saved: Decimal,

    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
    pub page_url: String,
}

/// Builds the webhook payload from the current estimator input and a
/// validated contact, timestamped now.
///
/// # Errors
///
/// Returns [`EstimatorError`] if the calculator rejects the input.
pub fn build_submission_payload(
    calculator: &SavingsCalculator,
    input: &EstimatorInput,
    contact: &ValidatedContact,
    page_url: &str,
) -> Result<LeadSubmission, EstimatorError> {
    build_submission_payload_at(calculator, input, contact, page_url, Utc::now())
}

/// Same as [`build_submission_payload`] with an explicit timestamp.
pub fn build_submission_payload_at(
    calculator: &SavingsCalculator,
    input: &EstimatorInput,
    contact: &ValidatedContact,
    page_url: &str,
    submitted_at: DateTime<Utc>,
) -> Result<LeadSubmission, EstimatorError> {
    let savings = calculator.compute_monthly_savings(input)?;

    Ok(LeadSubmission {
        full_name: contact.full_name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        company: contact.company.clone(),
        employee_tier: savings.tier.label().to_string(),
        employee_count_tier: savings.tier.ordinal(),
        manager_count: input.manager_count,
        base_hours_saved_per_week: input.base_hours_saved_per_week,
        hourly_cost: input.hourly_cost,
        monthly_hours_saved: round_half_up(savings.hours),
        monthly_cost_saved: round_half_up(savings.cost),
        timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        page_url: page_url.to_string(),
    })
}
