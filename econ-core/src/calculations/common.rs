//! Common helpers shared by the unit economics calculations.
//!
//! Rounding to display units and coercion of raw form input into amounts.
//! Everything here is total: bad input becomes zero, never an error.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds a value to whole won using half-up rounding (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::calculations::common::round_to_won;
///
/// assert_eq!(round_to_won(dec!(860664.297)), dec!(860664));
/// assert_eq!(round_to_won(dec!(0.5)), dec!(1));
/// assert_eq!(round_to_won(dec!(-2.5)), dec!(-3)); // Away from zero
/// ```
pub fn round_to_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to whole won with ties going toward positive infinity,
/// the way a browser's `Math.round` does. Used for monthly profit in the
/// report, which can be negative.
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::calculations::common::round_to_won_ties_up;
///
/// assert_eq!(round_to_won_ties_up(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_to_won_ties_up(dec!(-1234.5)), dec!(-1234));
/// assert_eq!(round_to_won_ties_up(dec!(-1234.51)), dec!(-1235));
/// ```
pub fn round_to_won_ties_up(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}

/// Rounds a percentage to one decimal place using half-up rounding.
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::calculations::common::round_to_tenth;
///
/// assert_eq!(round_to_tenth(dec!(83.84)), dec!(83.8));
/// assert_eq!(round_to_tenth(dec!(83.85)), dec!(83.9));
/// ```
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Turns raw amount text from a form field into an amount.
///
/// Trims whitespace and drops thousands separators. Empty or unparseable
/// text becomes `0`, the same value a live-recalculating form shows while
/// the user is still typing.
pub fn coerce_amount(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', "");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %raw, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Converts a floating point amount, mapping NaN and infinities to `0`.
pub fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        warn!(value, "non-finite amount treated as zero");
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or_else(|| {
        warn!(value, "amount outside decimal range treated as zero");
        Decimal::ZERO
    })
}
