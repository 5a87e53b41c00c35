use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::models::EmployeeTier;

/// The values behind the estimator sliders.
///
/// Every field has a default so the estimator can render before the
/// visitor touches anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorInput {
    /// Number of manager/admin roles being modeled.
    pub manager_count: i32,

    /// Hours saved per manager per week, independent of company size.
    pub base_hours_saved_per_week: Decimal,

    /// Fully loaded hourly cost of a manager.
    pub hourly_cost: Decimal,

    /// Ordinal 1..=5, see [`EmployeeTier`].
    pub employee_count_tier: u8,
}

impl Default for EstimatorInput {
    fn default() -> Self {
        Self {
            manager_count: 5,
            base_hours_saved_per_week: Decimal::ONE,
            hourly_cost: Decimal::from(50),
            employee_count_tier: EmployeeTier::FiveHundredToOneThousand.ordinal(),
        }
    }
}

impl EstimatorInput {
    /// Checks every field against its domain and returns the typed tier.
    pub fn validate(&self) -> Result<EmployeeTier, InvalidInput> {
        if self.manager_count < 0 {
            return Err(InvalidInput::NegativeManagerCount(self.manager_count));
        }
        if self.base_hours_saved_per_week < Decimal::ZERO {
            return Err(InvalidInput::NegativeBaseHours(
                self.base_hours_saved_per_week,
            ));
        }
        if self.hourly_cost < Decimal::ZERO {
            return Err(InvalidInput::NegativeHourlyCost(self.hourly_cost));
        }
        EmployeeTier::try_from(self.employee_count_tier)
    }
}
