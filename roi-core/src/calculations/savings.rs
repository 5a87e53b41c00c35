//! Monthly labor savings calculation.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Tier addon for the organization size ([`SavingsPolicy::tier_addon`]) |
//! | 2    | Effective weekly hours per manager: base hours + Step 1 |
//! | 3    | Monthly hours: managers × Step 2 × 4.33 |
//! | 4    | Optional rounding of Step 3 ([`SavingsPolicy::round_monthly_hours`]) |
//! | 5    | Monthly cost: Step 4 × hourly cost |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::{EstimatorInput, SavingsCalculator, SavingsPolicy};
//!
//! let calculator = SavingsCalculator::new(SavingsPolicy::mid_market_baseline());
//! let input = EstimatorInput {
//!     manager_count: 5,
//!     base_hours_saved_per_week: dec!(1.0),
//!     hourly_cost: dec!(50),
//!     employee_count_tier: 3,
//! };
//!
//! let savings = calculator.compute_monthly_savings(&input).unwrap();
//!
//! assert_eq!(savings.hours, dec!(21.65));
//! assert_eq!(savings.cost, dec!(1082.50));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{EstimatorError, InvalidInput};
use crate::models::{EstimatorInput, MonthlySavings};
use crate::policy::SavingsPolicy;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Calculator for monthly savings under a fixed [`SavingsPolicy`].
#[derive(Debug, Clone, Default)]
pub struct SavingsCalculator {
    policy: SavingsPolicy,
}

impl SavingsCalculator {
    pub fn new(policy: SavingsPolicy) -> Self {
        Self { policy }
    }

    /// Computes monthly hours and cost saved for `input`.
    ///
    /// This is the only path that produces savings figures; the display
    /// step and the lead payload both call it, so what the visitor sees is
    /// exactly what gets forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if:
    /// - the policy fails [`SavingsPolicy::validate`]
    /// - the input fails [`EstimatorInput::validate`]
    /// - an intermediate figure does not fit in a `Decimal`
    ///   ([`InvalidInput::SavingsOverflow`])
    pub fn compute_monthly_savings(
        &self,
        input: &EstimatorInput,
    ) -> Result<MonthlySavings, EstimatorError> {
        self.policy.validate()?;
        let tier = input.validate()?;

        let tier_addon = self.policy.tier_addon(tier);
        let effective_weekly_hours = self.effective_weekly_hours(input.base_hours_saved_per_week, tier_addon)?;
        let raw_hours = self.monthly_hours(input.manager_count, effective_weekly_hours)?;
        let hours = self
            .policy
            .round_monthly_hours(raw_hours)
            .ok_or(InvalidInput::SavingsOverflow)?;
        let cost = self.monthly_cost(hours, input.hourly_cost)?;

        trace!(
            %tier,
            %tier_addon,
            %raw_hours,
            %hours,
            %cost,
            "computed monthly savings"
        );

        Ok(MonthlySavings {
            hours,
            cost,
            effective_weekly_hours,
            tier_addon,
            tier,
        })
    }

    fn effective_weekly_hours(
        &self,
        base_hours: Decimal,
        tier_addon: Decimal,
    ) -> Result<Decimal, InvalidInput> {
        base_hours
            .checked_add(tier_addon)
            .ok_or(InvalidInput::SavingsOverflow)
    }

    fn monthly_hours(
        &self,
        manager_count: i32,
        effective_weekly_hours: Decimal,
    ) -> Result<Decimal, InvalidInput> {
        Decimal::from(manager_count)
            .checked_mul(effective_weekly_hours)
            .and_then(|weekly| weekly.checked_mul(WEEKS_PER_MONTH))
            .ok_or(InvalidInput::SavingsOverflow)
    }

    fn monthly_cost(
        &self,
        monthly_hours: Decimal,
        hourly_cost: Decimal,
    ) -> Result<Decimal, InvalidInput> {
        monthly_hours
            .checked_mul(hourly_cost)
            .ok_or(InvalidInput::SavingsOverflow)
    }
}
