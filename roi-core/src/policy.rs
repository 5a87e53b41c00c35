//! Savings policy: how organization size scales the per-manager estimate and
//! whether monthly hours are rounded before the cost is derived.
//!
//! Past releases of the estimator disagreed on the baseline tier, the step
//! size and the rounding rule. Each variant is expressible here, so the rule
//! in force is whatever the deployment configures.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::{EmployeeTier, HoursRounding, SavingsPolicy, TierAddon};
//!
//! let policy = SavingsPolicy {
//!     tier_addon: TierAddon::Stepped { baseline_tier: 2, step: dec!(0.25) },
//!     hours_rounding: HoursRounding::NearestQuarterHour,
//! };
//!
//! assert!(policy.validate().is_ok());
//! assert_eq!(policy.tier_addon(EmployeeTier::OverFiveThousand), dec!(0.75));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidPolicy;
use crate::models::EmployeeTier;

/// Additional weekly hours per manager contributed by organization size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierAddon {
    /// Zero at or below `baseline_tier`, then `step` more for each tier above.
    Stepped { baseline_tier: u8, step: Decimal },

    /// Explicit addon for tiers 1 through 5, in order.
    Table { addons: [Decimal; 5] },
}

/// Rounding applied to monthly hours before the cost is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursRounding {
    #[default]
    Exact,
    /// Round to the nearest 0.25 hour.
    NearestQuarterHour,
}

impl HoursRounding {
    pub const QUARTER_HOUR: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsPolicy {
    pub tier_addon: TierAddon,
    pub hours_rounding: HoursRounding,
}

impl Default for SavingsPolicy {
    fn default() -> Self {
        Self::mid_market_baseline()
    }
}

impl SavingsPolicy {
    /// Tier 3 (500-1K) is the baseline; each tier above adds 0.2 hours.
    pub fn mid_market_baseline() -> Self {
        Self {
            tier_addon: TierAddon::Stepped {
                baseline_tier: EmployeeTier::FiveHundredToOneThousand.ordinal(),
                step: Decimal::new(2, 1),
            },
            hours_rounding: HoursRounding::Exact,
        }
    }

    /// Tier 2 (100-500) is the baseline; each tier above adds 0.25 hours and
    /// monthly hours are rounded to the quarter hour.
    pub fn small_business_baseline() -> Self {
        Self {
            tier_addon: TierAddon::Stepped {
                baseline_tier: EmployeeTier::HundredToFiveHundred.ordinal(),
                step: Decimal::new(25, 2),
            },
            hours_rounding: HoursRounding::NearestQuarterHour,
        }
    }

    /// Organization size has no effect.
    pub fn flat() -> Self {
        Self {
            tier_addon: TierAddon::Table {
                addons: [Decimal::ZERO; 5],
            },
            hours_rounding: HoursRounding::Exact,
        }
    }

    pub fn with_hours_rounding(
        mut self,
        hours_rounding: HoursRounding,
    ) -> Self {
        self.hours_rounding = hours_rounding;
        self
    }

    /// Checks that the addon is non-negative and never decreases as the
    /// tier grows.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPolicy`] if:
    /// - a stepped baseline is not a valid tier ordinal
    /// - a stepped step is negative
    /// - a table entry is negative, or smaller than the entry before it
    pub fn validate(&self) -> Result<(), InvalidPolicy> {
        match &self.tier_addon {
            TierAddon::Stepped {
                baseline_tier,
                step,
            } => {
                if EmployeeTier::from_ordinal(*baseline_tier).is_none() {
                    return Err(InvalidPolicy::BaselineTierOutOfRange(*baseline_tier));
                }
                if *step < Decimal::ZERO {
                    return Err(InvalidPolicy::NegativeStep(*step));
                }
            }
            TierAddon::Table { addons } => {
                let mut previous = Decimal::ZERO;
                for (tier, addon) in EmployeeTier::all().iter().zip(addons) {
                    if *addon < Decimal::ZERO {
                        return Err(InvalidPolicy::NegativeAddon {
                            tier: tier.ordinal(),
                            addon: *addon,
                        });
                    }
                    if *addon < previous {
                        return Err(InvalidPolicy::DecreasingAddon {
                            tier: tier.ordinal(),
                        });
                    }
                    previous = *addon;
                }
            }
        }
        Ok(())
    }

    /// Weekly hours per manager added for `tier`.
    pub fn tier_addon(
        &self,
        tier: EmployeeTier,
    ) -> Decimal {
        match &self.tier_addon {
            TierAddon::Stepped {
                baseline_tier,
                step,
            } => {
                let steps_above = tier.ordinal().saturating_sub(*baseline_tier);
                step.saturating_mul(Decimal::from(steps_above))
            }
            TierAddon::Table { addons } => addons[usize::from(tier.ordinal() - 1)],
        }
    }

    /// Applies the configured rounding to a monthly hour figure. `None` if
    /// the rounded figure does not fit in a `Decimal`.
    pub fn round_monthly_hours(
        &self,
        hours: Decimal,
    ) -> Option<Decimal> {
        match self.hours_rounding {
            HoursRounding::Exact => Some(hours),
            HoursRounding::NearestQuarterHour => {
                crate::calculations::common::round_to_increment(hours, HoursRounding::QUARTER_HOUR)
            }
        }
    }
}
