//! Estimator state container.
//!
//! The estimator holds one [`EstimatorInput`] for the lifetime of a session.
//! Adapters feed slider changes in as [`InputChange`]s and render whatever
//! [`EstimatorState::on_input_changed`] returns; nothing else reads or writes
//! the input.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculations::SavingsCalculator;
use crate::display::DisplayMetrics;
use crate::error::EstimatorError;
use crate::models::{EstimatorInput, MonthlySavings};
use crate::policy::SavingsPolicy;

/// A single slider or selector change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    Managers(i32),
    BaseHours(Decimal),
    HourlyCost(Decimal),
    Tier(u8),
}

/// Savings plus their rendered form, recomputed after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub savings: MonthlySavings,
    pub display: DisplayMetrics,
}

#[derive(Debug, Clone, Default)]
pub struct EstimatorState {
    input: EstimatorInput,
    calculator: SavingsCalculator,
}

impl EstimatorState {
    pub fn new(
        input: EstimatorInput,
        policy: SavingsPolicy,
    ) -> Self {
        Self {
            input,
            calculator: SavingsCalculator::new(policy),
        }
    }

    pub fn input(&self) -> &EstimatorInput {
        &self.input
    }

    pub fn calculator(&self) -> &SavingsCalculator {
        &self.calculator
    }

    /// Recomputes the derived metrics for the current input.
    pub fn on_input_changed(&self) -> Result<DerivedMetrics, EstimatorError> {
        derive(&self.calculator, &self.input)
    }

    /// Applies one change and returns the recomputed metrics.
    ///
    /// The change is checked against a copy first; if it would leave the
    /// input invalid the state is unchanged and the error is returned.
    pub fn apply(
        &mut self,
        change: InputChange,
    ) -> Result<DerivedMetrics, EstimatorError> {
        let mut candidate = self.input.clone();
        match change {
            InputChange::Managers(count) => candidate.manager_count = count,
            InputChange::BaseHours(hours) => candidate.base_hours_saved_per_week = hours,
            InputChange::HourlyCost(cost) => candidate.hourly_cost = cost,
            InputChange::Tier(tier) => candidate.employee_count_tier = tier,
        }

        let derived = derive(&self.calculator, &candidate)?;
        debug!(?change, hours = %derived.savings.hours, "estimator input changed");
        self.input = candidate;
        Ok(derived)
    }
}

fn derive(
    calculator: &SavingsCalculator,
    input: &EstimatorInput,
) -> Result<DerivedMetrics, EstimatorError> {
    let savings = calculator.compute_monthly_savings(input)?;
    let display = DisplayMetrics::render(input, &savings);
    Ok(DerivedMetrics { savings, display })
}
