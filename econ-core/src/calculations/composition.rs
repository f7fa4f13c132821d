use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::sum;
use crate::{CostCategory, CostItem};

/// Which categories a composition breakdown covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionView {
    #[default]
    All,
    Fixed,
    Variable,
}

/// One slice of a cost-composition breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostShare {
    /// `"<name> (고정비)"` or `"<name> (변동비)"`.
    pub label: String,
    pub category: CostCategory,
    pub amount: Decimal,
    /// Share of the total of the shown items, `0` when that total is `0`.
    pub percent: Decimal,
}

/// Breaks fixed and variable costs down into labelled shares.
///
/// [`CompositionView::All`] lists the fixed items first, then the variable
/// ones. Percentages are unrounded; the presentation layer picks a precision.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::CostItem;
/// use econ_core::calculations::{cost_composition, CompositionView};
///
/// let fixed = [CostItem::new("1", "임대료", dec!(300))];
/// let variable = [CostItem::new("1", "원자재비", dec!(100))];
///
/// let shares = cost_composition(&fixed, &variable, CompositionView::All);
///
/// assert_eq!(shares[0].label, "임대료 (고정비)");
/// assert_eq!(shares[0].percent, dec!(75));
/// assert_eq!(shares[1].percent, dec!(25));
/// ```
pub fn cost_composition(
    fixed_items: &[CostItem],
    variable_items: &[CostItem],
    view: CompositionView,
) -> Vec<CostShare> {
    let mut shown: Vec<(CostCategory, &CostItem)> = Vec::new();
    if matches!(view, CompositionView::All | CompositionView::Fixed) {
        shown.extend(fixed_items.iter().map(|item| (CostCategory::Fixed, item)));
    }
    if matches!(view, CompositionView::All | CompositionView::Variable) {
        shown.extend(variable_items.iter().map(|item| (CostCategory::Variable, item)));
    }

    let total = sum(shown.iter().map(|(_, item)| *item));

    shown
        .into_iter()
        .map(|(category, item)| CostShare {
            label: format!("{} ({})", item.name, category.label()),
            category,
            amount: item.amount,
            percent: percent_of_total(item.amount, total),
        })
        .collect()
}

fn percent_of_total(
    amount: Decimal,
    total: Decimal,
) -> Decimal {
    amount
        .checked_div(total)
        .map(|ratio| ratio.saturating_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}
