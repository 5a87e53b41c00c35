//! Reach comparison between traditional channels and text-first outreach.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up_dp;
use crate::error::{EstimatorError, InvalidInput};

const MAX_REACH: Decimal = Decimal::ONE_HUNDRED;

/// Two reach percentages, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachComparison {
    pub traditional_reach: Decimal,
    pub text_first_reach: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachDelta {
    /// `text_first_reach - traditional_reach`, in percentage points.
    pub point_delta: Decimal,

    /// `text_first_reach / traditional_reach` to one decimal place.
    /// `None` when traditional reach is zero and no ratio exists.
    pub multiplier: Option<Decimal>,
}

impl ReachComparison {
    pub fn new(
        traditional_reach: Decimal,
        text_first_reach: Decimal,
    ) -> Self {
        Self {
            traditional_reach,
            text_first_reach,
        }
    }

    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidInput`] if either percentage is
    /// outside 0..=100.
    pub fn compare(&self) -> Result<ReachDelta, EstimatorError> {
        for reach in [self.traditional_reach, self.text_first_reach] {
            if reach < Decimal::ZERO || reach > MAX_REACH {
                return Err(InvalidInput::ReachOutOfRange(reach).into());
            }
        }

        let point_delta = self.text_first_reach - self.traditional_reach;
        let multiplier = if self.traditional_reach.is_zero() {
            None
        } else {
            Some(round_half_up_dp(
                self.text_first_reach / self.traditional_reach,
                1,
            ))
        };

        Ok(ReachDelta {
            point_delta,
            multiplier,
        })
    }
}
