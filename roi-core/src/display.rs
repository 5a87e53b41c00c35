//! Formatting of estimator state and results for display.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::ReachDelta;
use crate::calculations::common::{round_half_ceiling, round_half_up_dp};
use crate::models::{EstimatorInput, MonthlySavings};

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// Placeholder shown when a figure has no defined value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a dollar amount the way the results panel shows it.
///
/// Values of 1000 and above are shown in thousands with one decimal place;
/// anything smaller is rounded to whole dollars.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::format_currency;
///
/// assert_eq!(format_currency(dec!(999)), "$999");
/// assert_eq!(format_currency(dec!(1000)), "$1.0K");
/// assert_eq!(format_currency(dec!(2340)), "$2.3K");
/// assert_eq!(format_currency(dec!(742.3)), "$742");
/// ```
pub fn format_currency(value: Decimal) -> String {
    if value >= THOUSAND {
        format!("${}K", round_half_up_dp(value / THOUSAND, 1))
    } else {
        format!("${}", round_half_ceiling(value))
    }
}

/// Every string the estimator panel renders, derived from one input snapshot
/// and its savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMetrics {
    pub managers: String,
    pub hours_saved_per_week: String,
    pub hourly_cost: String,
    pub employee_tier: String,
    pub monthly_hours_saved: String,
    pub monthly_cost_saved: String,
}

impl DisplayMetrics {
    pub fn render(
        input: &EstimatorInput,
        savings: &MonthlySavings,
    ) -> Self {
        Self {
            managers: input.manager_count.to_string(),
            hours_saved_per_week: round_half_up_dp(input.base_hours_saved_per_week, 1).to_string(),
            hourly_cost: format!("${}", input.hourly_cost.normalize()),
            employee_tier: savings.tier.label().to_string(),
            monthly_hours_saved: round_half_up_dp(savings.hours, 1).to_string(),
            monthly_cost_saved: format_currency(savings.cost),
        }
    }
}

impl fmt::Display for DisplayMetrics {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Managers:               {}", self.managers)?;
        writeln!(f, "Hours saved / week:     {}", self.hours_saved_per_week)?;
        writeln!(f, "Hourly manager cost:    {}", self.hourly_cost)?;
        writeln!(f, "Employees:              {}", self.employee_tier)?;
        writeln!(f, "Monthly hours saved:    {}", self.monthly_hours_saved)?;
        writeln!(f, "Monthly cost saved:     {}", self.monthly_cost_saved)
    }
}

/// Rendered reach comparison. A missing multiplier shows as [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachDisplay {
    pub point_delta: String,
    pub multiplier: String,
}

impl ReachDisplay {
    pub fn render(delta: &ReachDelta) -> Self {
        let points = delta.point_delta.normalize();
        let point_delta = if points.is_sign_negative() && !points.is_zero() {
            format!("{points} pts")
        } else {
            format!("+{} pts", points.abs())
        };
        let multiplier = delta
            .multiplier
            .map(|m| format!("{m}x"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            point_delta,
            multiplier,
        }
    }
}

impl fmt::Display for ReachDisplay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Reach difference:       {}", self.point_delta)?;
        writeln!(f, "Reach multiplier:       {}", self.multiplier)
    }
}
