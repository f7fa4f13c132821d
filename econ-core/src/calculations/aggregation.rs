use rust_decimal::Decimal;

use crate::CostItem;

/// Sums the amounts of a sequence of cost items.
///
/// An empty sequence sums to `0`. Addition saturates at the decimal range
/// instead of overflowing, so the result never panics. Amounts that came in
/// as blank or non-finite input have already been coerced to `0` by
/// [`coerce_amount`](super::common::coerce_amount) /
/// [`decimal_from_f64`](super::common::decimal_from_f64).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::CostItem;
/// use econ_core::calculations::sum;
///
/// let items = [
///     CostItem::new("1", "임대료", dec!(3000000)),
///     CostItem::new("2", "인건비", dec!(5000000)),
/// ];
///
/// assert_eq!(sum(&items), dec!(8000000));
/// assert_eq!(sum(&[] as &[CostItem]), dec!(0));
/// ```
pub fn sum<'a>(items: impl IntoIterator<Item = &'a CostItem>) -> Decimal {
    items
        .into_iter()
        .fold(Decimal::ZERO, |total, item| total.saturating_add(item.amount))
}
