//! Derived unit economics metrics.
//!
//! | Metric | Formula | When undefined |
//! |--------|---------|----------------|
//! | contribution | price - variable | never |
//! | margin % | contribution / price × 100 | price ≤ 0 → `0` |
//! | monthly profit | contribution × monthly volume - fixed | never |
//! | break-even units | ⌈fixed / contribution⌉ | contribution ≤ 0 → `0` |

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::sum;
use crate::config::EngineConfig;
use crate::{CostItem, DerivedMetrics};

/// Computes all derived metrics from scratch.
///
/// `effective_fixed_items` is the fixed collection with any synthetic lines
/// (loan payment, store rent) already appended. `sunk_items` only feed the
/// sunk total; one-time investment takes no part in per-unit profitability.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::CostItem;
/// use econ_core::calculations::compute_metrics;
///
/// let fixed = [
///     CostItem::new("1", "임대료", dec!(3000000)),
///     CostItem::new("2", "인건비", dec!(5000000)),
/// ];
/// let variable = [
///     CostItem::new("1", "원자재비", dec!(5000)),
///     CostItem::new("2", "포장비", dec!(500)),
///     CostItem::new("3", "물류비", dec!(2500)),
///     CostItem::new("4", "수수료", dec!(100)),
/// ];
///
/// let metrics = compute_metrics(dec!(50000), &variable, &fixed, &[], dec!(2500));
///
/// assert_eq!(metrics.total_variable, dec!(8100));
/// assert_eq!(metrics.margin_percent, dec!(83.8));
/// assert_eq!(metrics.monthly_profit, dec!(96750000));
/// assert_eq!(metrics.breakeven_units, 191);
/// ```
pub fn compute_metrics(
    price: Decimal,
    variable_items: &[CostItem],
    effective_fixed_items: &[CostItem],
    sunk_items: &[CostItem],
    monthly_volume: Decimal,
) -> DerivedMetrics {
    let total_variable = sum(variable_items);
    let total_fixed = sum(effective_fixed_items);
    let total_sunk = sum(sunk_items);

    let contribution_per_unit = price.saturating_sub(total_variable);
    let margin_percent = margin_percent(price, contribution_per_unit);
    let monthly_profit = contribution_per_unit
        .saturating_mul(monthly_volume)
        .saturating_sub(total_fixed);
    let breakeven_units = breakeven_units(total_fixed, contribution_per_unit);

    debug!(
        price = %price,
        total_variable = %total_variable,
        total_fixed = %total_fixed,
        margin_percent = %margin_percent,
        monthly_profit = %monthly_profit,
        breakeven_units,
        "Recomputed unit economics"
    );

    DerivedMetrics {
        total_fixed,
        total_variable,
        total_sunk,
        contribution_per_unit,
        margin_percent,
        monthly_profit,
        breakeven_units,
    }
}

/// Contribution margin as a percentage of price; `0` when price is not positive.
fn margin_percent(
    price: Decimal,
    contribution_per_unit: Decimal,
) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    contribution_per_unit
        .checked_div(price)
        .map(|ratio| ratio.saturating_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// Smallest whole number of units whose contribution covers fixed costs.
///
/// Reported as `0` when contribution is not positive (break-even cannot be
/// reached) and when fixed costs are not positive (already broken even).
fn breakeven_units(
    total_fixed: Decimal,
    contribution_per_unit: Decimal,
) -> u64 {
    if contribution_per_unit <= Decimal::ZERO {
        warn!(
            contribution_per_unit = %contribution_per_unit,
            "Price does not exceed variable cost; break-even is unreachable and reported as 0"
        );
        return 0;
    }
    if total_fixed <= Decimal::ZERO {
        return 0;
    }

    match total_fixed.checked_div(contribution_per_unit) {
        Some(units) => units.ceil().to_u64().unwrap_or(u64::MAX),
        None => u64::MAX,
    }
}

/// Advice shown next to the margin figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginAdvisory {
    /// Margin looks too good; some cost line may be missing.
    High,
    Healthy,
    /// Margin is thin; profitability is at risk.
    Low,
}

impl MarginAdvisory {
    /// Classifies a margin against the configured thresholds.
    ///
    /// `High` wins at or above `high_margin_threshold`, `Low` below
    /// `low_margin_threshold`.
    pub fn assess(
        margin_percent: Decimal,
        config: &EngineConfig,
    ) -> Self {
        if margin_percent >= config.high_margin_threshold {
            Self::High
        } else if margin_percent < config.low_margin_threshold {
            Self::Low
        } else {
            Self::Healthy
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::High => Some(
                "마진이 평균보다 높습니다. 누락된 고정비나 변동비가 없는지 다시 확인해보세요.",
            ),
            Self::Healthy => None,
            Self::Low => Some(
                "마진이 낮아 수익성이 위험할 수 있습니다. 판매가 조정이나 변동비 절감을 고려해보세요.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn sample_fixed() -> Vec<CostItem> {
        vec![
            CostItem::new("1", "임대료", dec!(3000000)),
            CostItem::new("2", "인건비", dec!(5000000)),
        ]
    }

    fn sample_variable() -> Vec<CostItem> {
        vec![
            CostItem::new("1", "원자재비", dec!(5000)),
            CostItem::new("2", "포장비", dec!(500)),
            CostItem::new("3", "물류비", dec!(2500)),
            CostItem::new("4", "수수료", dec!(100)),
        ]
    }

    fn variable_total(total: Decimal) -> Vec<CostItem> {
        vec![CostItem::new("v", "변동비", total)]
    }

    /// Initializes tracing subscriber for tests that hit the warning paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // compute_metrics tests
    // =========================================================================

    #[test]
    fn sample_scenario_metrics() {
        let metrics = compute_metrics(
            dec!(50000),
            &sample_variable(),
            &sample_fixed(),
            &[],
            dec!(2500),
        );

        assert_eq!(
            metrics,
            DerivedMetrics {
                total_fixed: dec!(8000000),
                total_variable: dec!(8100),
                total_sunk: dec!(0),
                contribution_per_unit: dec!(41900),
                margin_percent: dec!(83.8),
                monthly_profit: dec!(96750000),
                breakeven_units: 191,
            }
        );
    }

    #[test]
    fn sunk_costs_only_feed_their_total() {
        let sunk = vec![
            CostItem::new("sunk-1", "개발비", dec!(100000)),
            CostItem::new("sunk-2", "마케팅 초기 예산", dec!(50000)),
        ];

        let with_sunk = compute_metrics(dec!(50000), &sample_variable(), &sample_fixed(), &sunk, dec!(2500));
        let without = compute_metrics(dec!(50000), &sample_variable(), &sample_fixed(), &[], dec!(2500));

        assert_eq!(with_sunk.total_sunk, dec!(150000));
        assert_eq!(with_sunk.monthly_profit, without.monthly_profit);
        assert_eq!(with_sunk.breakeven_units, without.breakeven_units);
    }

    #[test]
    fn monthly_volume_is_a_parameter() {
        let metrics = compute_metrics(dec!(50000), &sample_variable(), &sample_fixed(), &[], dec!(1000));

        // 41,900 * 1,000 - 8,000,000
        assert_eq!(metrics.monthly_profit, dec!(33900000));
    }

    // =========================================================================
    // margin tests
    // =========================================================================

    #[test]
    fn margin_matches_formula_for_positive_price() {
        for (price, variable) in [
            (dec!(50000), dec!(8100)),
            (dec!(1000), dec!(250)),
            (dec!(1000), dec!(1500)),
        ] {
            let metrics = compute_metrics(price, &variable_total(variable), &[], &[], dec!(2500));

            assert_eq!(metrics.margin_percent, (price - variable) / price * dec!(100));
        }
    }

    #[test]
    fn margin_is_zero_for_zero_price() {
        let metrics = compute_metrics(dec!(0), &sample_variable(), &sample_fixed(), &[], dec!(2500));

        assert_eq!(metrics.margin_percent, Decimal::ZERO);
    }

    #[test]
    fn margin_is_zero_for_negative_price() {
        let metrics = compute_metrics(dec!(-100), &[], &[], &[], dec!(2500));

        assert_eq!(metrics.margin_percent, Decimal::ZERO);
    }

    #[test]
    fn margin_can_be_negative_when_variable_exceeds_price() {
        let metrics = compute_metrics(dec!(1000), &variable_total(dec!(1500)), &[], &[], dec!(2500));

        assert_eq!(metrics.margin_percent, dec!(-50));
    }

    // =========================================================================
    // break-even tests
    // =========================================================================

    #[test]
    fn breakeven_rounds_up_partial_units() {
        let metrics = compute_metrics(dec!(50000), &variable_total(dec!(8100)), &sample_fixed(), &[], dec!(2500));

        // 8,000,000 / 41,900 = 190.93...
        assert_eq!(metrics.breakeven_units, 191);
    }

    #[test]
    fn breakeven_exact_division_is_not_rounded_up() {
        let fixed = vec![CostItem::new("f", "고정비", dec!(1000000))];

        let metrics = compute_metrics(dec!(1500), &variable_total(dec!(500)), &fixed, &[], dec!(2500));

        assert_eq!(metrics.breakeven_units, 1000);
    }

    #[test]
    fn breakeven_is_zero_when_contribution_is_zero() {
        let _guard = init_test_tracing();

        let metrics = compute_metrics(dec!(8100), &variable_total(dec!(8100)), &sample_fixed(), &[], dec!(2500));

        assert_eq!(metrics.breakeven_units, 0);
        assert!(!metrics.is_breakeven_reachable());
    }

    #[test]
    fn breakeven_is_zero_when_contribution_is_negative() {
        let _guard = init_test_tracing();

        let metrics = compute_metrics(dec!(5000), &variable_total(dec!(8100)), &sample_fixed(), &[], dec!(2500));

        assert_eq!(metrics.breakeven_units, 0);
        assert_eq!(metrics.contribution_per_unit, dec!(-3100));
    }

    #[test]
    fn breakeven_is_zero_without_fixed_costs() {
        let metrics = compute_metrics(dec!(50000), &sample_variable(), &[], &[], dec!(2500));

        assert_eq!(metrics.breakeven_units, 0);
        assert!(metrics.is_breakeven_reachable());
    }

    #[test]
    fn breakeven_saturates_for_huge_fixed_costs() {
        let fixed = vec![CostItem::new("f", "고정비", Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0))];

        let metrics = compute_metrics(dec!(2), &variable_total(dec!(1)), &fixed, &[], dec!(2500));

        assert_eq!(metrics.breakeven_units, u64::MAX);
    }

    // =========================================================================
    // MarginAdvisory tests
    // =========================================================================

    #[test]
    fn advisory_high_at_threshold() {
        let config = EngineConfig::default();

        assert_eq!(MarginAdvisory::assess(dec!(20), &config), MarginAdvisory::High);
        assert_eq!(MarginAdvisory::assess(dec!(83.8), &config), MarginAdvisory::High);
    }

    #[test]
    fn advisory_low_below_threshold() {
        let config = EngineConfig::default();

        assert_eq!(MarginAdvisory::assess(dec!(9.9), &config), MarginAdvisory::Low);
        assert_eq!(MarginAdvisory::assess(dec!(-50), &config), MarginAdvisory::Low);
    }

    #[test]
    fn advisory_healthy_between_thresholds() {
        let config = EngineConfig::default();

        assert_eq!(MarginAdvisory::assess(dec!(10), &config), MarginAdvisory::Healthy);
        assert_eq!(MarginAdvisory::assess(dec!(19.9), &config), MarginAdvisory::Healthy);
        assert_eq!(MarginAdvisory::Healthy.message(), None);
    }
}
