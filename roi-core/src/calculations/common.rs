//! Rounding helpers shared by the savings calculation, the display step and
//! the lead payload.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Used for the monetary and hour figures forwarded with a lead.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1082.504)), dec!(1082.50));
/// assert_eq!(round_half_up(dec!(21.655)), dec!(21.66));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_half_up_dp(value, 2)
}

/// Rounds to `dp` decimal places, midpoints away from zero, and pads the
/// scale so the value always prints with exactly `dp` digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::round_half_up_dp;
///
/// assert_eq!(round_half_up_dp(dec!(1), 1).to_string(), "1.0");
/// assert_eq!(round_half_up_dp(dec!(1.0825), 1).to_string(), "1.1");
/// ```
pub fn round_half_up_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Rounds to the nearest whole number with midpoints going toward positive
/// infinity, i.e. `floor(value + 0.5)`.
pub fn round_half_ceiling(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(0, strategy);
    rounded.rescale(0);
    rounded
}

/// Rounds to the nearest multiple of `increment`, midpoints away from zero.
///
/// A zero or negative increment leaves the value untouched. Returns `None`
/// when the number of increments does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::round_to_increment;
///
/// assert_eq!(round_to_increment(dec!(30.31), dec!(0.25)), Some(dec!(30.25)));
/// assert_eq!(round_to_increment(dec!(30.375), dec!(0.25)), Some(dec!(30.50)));
/// ```
pub fn round_to_increment(
    value: Decimal,
    increment: Decimal,
) -> Option<Decimal> {
    if increment <= Decimal::ZERO {
        return Some(value);
    }
    let steps = value
        .checked_div(increment)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    steps.checked_mul(increment)
}
