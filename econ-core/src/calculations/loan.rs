//! Amortized loan payment.
//!
//! The monthly payment `P` that repays principal `L` at monthly rate `r`
//! over `n` months is
//!
//! ```text
//! P = L * r / (1 - (1 + r)^-n)
//! ```
//!
//! With `r = 0` this degenerates to straight-line repayment `L / n`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use tracing::warn;

/// Computes the constant monthly payment of an amortized loan.
///
/// Edge cases all resolve to a number:
///
/// | Input | Result |
/// |-------|--------|
/// | `principal <= 0` or `term_months == 0` | `0` |
/// | annual rate `0` | `principal / term_months` |
/// | `1 - (1 + r)^-n == 0` | `0` |
/// | `(1 + r)^n` beyond the decimal range | `principal * r` (the limit as `n` grows) |
///
/// The result is not rounded; round with
/// [`round_to_won`](super::common::round_to_won) before showing it.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::calculations::loan_payment;
///
/// // Zero interest: straight-line repayment
/// assert_eq!(loan_payment(dec!(1200000), dec!(0), 12), dec!(100000));
///
/// // Not enough information
/// assert_eq!(loan_payment(dec!(0), dec!(5), 12), dec!(0));
/// assert_eq!(loan_payment(dec!(1200000), dec!(5), 0), dec!(0));
/// ```
pub fn loan_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Decimal {
    if principal <= Decimal::ZERO || term_months == 0 {
        return Decimal::ZERO;
    }

    let months = Decimal::from(term_months);
    let monthly_rate = annual_rate_percent / dec!(100) / dec!(12);

    if monthly_rate.is_zero() {
        return principal / months;
    }

    let discount = match (Decimal::ONE + monthly_rate).checked_powu(u64::from(term_months)) {
        Some(growth) if !growth.is_zero() => Decimal::ONE / growth,
        Some(_) => {
            warn!(
                annual_rate_percent = %annual_rate_percent,
                term_months,
                "Loan growth factor collapsed to zero; no payment computed"
            );
            return Decimal::ZERO;
        }
        None => {
            warn!(
                annual_rate_percent = %annual_rate_percent,
                term_months,
                "Loan growth factor exceeds decimal range; using interest-only payment"
            );
            Decimal::ZERO
        }
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        warn!(
            principal = %principal,
            annual_rate_percent = %annual_rate_percent,
            term_months,
            "Amortization denominator is zero; no payment computed"
        );
        return Decimal::ZERO;
    }

    principal.saturating_mul(monthly_rate / denominator)
}
