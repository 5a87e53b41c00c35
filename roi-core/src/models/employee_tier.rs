use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Ordinal bucket of organization size, as offered by the employee-count
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeTier {
    UnderHundred,
    HundredToFiveHundred,
    FiveHundredToOneThousand,
    OneThousandToFiveThousand,
    OverFiveThousand,
}

impl EmployeeTier {
    pub fn all() -> &'static [EmployeeTier] {
        &[
            EmployeeTier::UnderHundred,
            EmployeeTier::HundredToFiveHundred,
            EmployeeTier::FiveHundredToOneThousand,
            EmployeeTier::OneThousandToFiveThousand,
            EmployeeTier::OverFiveThousand,
        ]
    }

    /// The 1-based ordinal used by the slider and the webhook payload.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::UnderHundred => 1,
            Self::HundredToFiveHundred => 2,
            Self::FiveHundredToOneThousand => 3,
            Self::OneThousandToFiveThousand => 4,
            Self::OverFiveThousand => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UnderHundred => "<100",
            Self::HundredToFiveHundred => "100-500",
            Self::FiveHundredToOneThousand => "500-1K",
            Self::OneThousandToFiveThousand => "1K-5K",
            Self::OverFiveThousand => "5K+",
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::UnderHundred),
            2 => Some(Self::HundredToFiveHundred),
            3 => Some(Self::FiveHundredToOneThousand),
            4 => Some(Self::OneThousandToFiveThousand),
            5 => Some(Self::OverFiveThousand),
            _ => None,
        }
    }

    pub fn parse_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.label() == label.trim())
    }
}

impl TryFrom<u8> for EmployeeTier {
    type Error = InvalidInput;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(InvalidInput::TierOutOfRange(ordinal))
    }
}

impl fmt::Display for EmployeeTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ordinals_round_trip_through_from_ordinal() {
        for tier in EmployeeTier::all() {
            assert_eq!(EmployeeTier::from_ordinal(tier.ordinal()), Some(*tier));
        }
    }

    #[test]
    fn try_from_rejects_zero_and_six() {
        assert_eq!(
            EmployeeTier::try_from(0),
            Err(InvalidInput::TierOutOfRange(0))
        );
        assert_eq!(
            EmployeeTier::try_from(6),
            Err(InvalidInput::TierOutOfRange(6))
        );
    }

    #[test]
    fn parse_label_matches_selector_values() {
        assert_eq!(
            EmployeeTier::parse_label(" 100-500 "),
            Some(EmployeeTier::HundredToFiveHundred)
        );
        assert_eq!(
            EmployeeTier::parse_label("5K+"),
            Some(EmployeeTier::OverFiveThousand)
        );
        assert_eq!(EmployeeTier::parse_label("huge"), None);
    }

    #[test]
    fn tiers_are_ordered_by_size() {
        assert!(EmployeeTier::UnderHundred < EmployeeTier::OverFiveThousand);
        assert_eq!(EmployeeTier::OneThousandToFiveThousand.to_string(), "1K-5K");
    }
}
