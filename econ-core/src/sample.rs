//! Demonstration scenario used to preview the analysis before real data
//! has been entered.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{CostCollection, CostCollections, CostItem, PricingInput};

pub const PRODUCT_NAME: &str = "더미 제품명";
pub const TARGET_PRICE: Decimal = dec!(50000);

/// `(id, name, amount)` rows of the sample fixed costs.
pub const FIXED_COSTS: &[(&str, &str, Decimal)] = &[
    ("1", "임대료", dec!(3000000)),
    ("2", "인건비", dec!(5000000)),
];

pub const VARIABLE_COSTS: &[(&str, &str, Decimal)] = &[
    ("1", "원자재비", dec!(5000)),
    ("2", "포장비", dec!(500)),
    ("3", "물류비", dec!(2500)),
    ("4", "수수료", dec!(100)),
];

pub const SUNK_COSTS: &[(&str, &str, Decimal)] = &[
    ("sunk-1", "개발비", dec!(100000)),
    ("sunk-2", "마케팅 초기 예산", dec!(50000)),
    ("sunk-3", "웹사이트", dec!(10000)),
];

pub fn pricing() -> PricingInput {
    PricingInput::new(PRODUCT_NAME, TARGET_PRICE)
}

pub fn costs() -> CostCollections {
    CostCollections {
        fixed: collection(FIXED_COSTS),
        variable: collection(VARIABLE_COSTS),
        sunk: collection(SUNK_COSTS),
    }
}

fn collection(rows: &[(&str, &str, Decimal)]) -> CostCollection {
    let items = rows
        .iter()
        .map(|&(id, name, amount)| CostItem::new(id, name, amount))
        .collect();
    CostCollection::from_items(items).expect("sample ids are unique and unreserved")
}
