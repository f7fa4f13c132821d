use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures derived from the current costs and price.
///
/// Never stored; rebuilt from scratch by
/// [`compute_metrics`](crate::calculations::compute_metrics) whenever an
/// input changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub total_fixed: Decimal,
    pub total_variable: Decimal,
    pub total_sunk: Decimal,

    /// Price minus variable cost per unit. May be zero or negative.
    pub contribution_per_unit: Decimal,

    /// Contribution margin as a percentage of price, `0` when price is not positive.
    pub margin_percent: Decimal,

    pub monthly_profit: Decimal,

    /// Units needed to cover fixed costs, `0` when contribution is not positive.
    pub breakeven_units: u64,
}

impl DerivedMetrics {
    /// False when price does not exceed variable cost, in which case
    /// `breakeven_units` is reported as `0` but no volume would break even.
    pub fn is_breakeven_reachable(&self) -> bool {
        self.contribution_per_unit > Decimal::ZERO
    }
}
