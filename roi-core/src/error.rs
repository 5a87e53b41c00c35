use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the estimator core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimatorError {
    /// One of the estimator inputs is outside its documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The savings policy would produce a negative or non-monotonic addon.
    #[error("invalid savings policy: {0}")]
    InvalidPolicy(#[from] InvalidPolicy),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("manager count must be non-negative, got {0}")]
    NegativeManagerCount(i32),

    #[error("base hours saved per week must be non-negative, got {0}")]
    NegativeBaseHours(Decimal),

    #[error("hourly cost must be non-negative, got {0}")]
    NegativeHourlyCost(Decimal),

    #[error("employee count tier must be between 1 and 5, got {0}")]
    TierOutOfRange(u8),

    #[error("reach percentage must be between 0 and 100, got {0}")]
    ReachOutOfRange(Decimal),

    #[error("inputs are too large to compute savings")]
    SavingsOverflow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPolicy {
    #[error("baseline tier must be between 1 and 5, got {0}")]
    BaselineTierOutOfRange(u8),

    #[error("tier step must be non-negative, got {0}")]
    NegativeStep(Decimal),

    #[error("addon for tier {tier} must be non-negative, got {addon}")]
    NegativeAddon { tier: u8, addon: Decimal },

    #[error("addon for tier {tier} is smaller than the addon for the tier below it")]
    DecreasingAddon { tier: u8 },
}
