use std::borrow::Cow;

use crate::calculations::common::round_to_won;
use crate::calculations::loan_payment;
use crate::{CostItem, LOAN_ITEM_ID, LoanTerms};

/// Builds the fixed-cost sequence the calculations actually use.
///
/// When the loan is not included the input is handed back borrowed, same
/// items in the same order. When it is, a copy is returned with one extra
/// line, [`LOAN_ITEM_ID`], whose amount is the rounded monthly payment. The
/// line is appended even when the payment is `0`. The input is never
/// modified, so the loan line never leaks into the user-editable list.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use rust_decimal_macros::dec;
/// use econ_core::{CostItem, LoanTerms};
/// use econ_core::calculations::{effective_fixed, LOAN_ITEM_ID};
///
/// let fixed = vec![CostItem::new("1", "임대료", dec!(3000000))];
/// let loan = LoanTerms {
///     principal: dec!(1200000),
///     annual_rate_percent: dec!(0),
///     term_months: 12,
///     included: true,
/// };
///
/// let effective = effective_fixed(&fixed, &loan, "대출이자");
///
/// assert!(matches!(effective, Cow::Owned(_)));
/// assert_eq!(effective.len(), 2);
/// assert_eq!(effective[1].id, LOAN_ITEM_ID);
/// assert_eq!(effective[1].amount, dec!(100000));
/// ```
pub fn effective_fixed<'a>(
    fixed_items: &'a [CostItem],
    loan_terms: &LoanTerms,
    loan_label: &str,
) -> Cow<'a, [CostItem]> {
    if !loan_terms.included {
        return Cow::Borrowed(fixed_items);
    }

    let payment = loan_payment(
        loan_terms.principal,
        loan_terms.annual_rate_percent,
        loan_terms.term_months,
    );

    let mut items = Vec::with_capacity(fixed_items.len() + 1);
    items.extend_from_slice(fixed_items);
    items.push(CostItem::new(LOAN_ITEM_ID, loan_label, round_to_won(payment)));
    Cow::Owned(items)
}
