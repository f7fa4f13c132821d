use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_to_won;
use crate::{CHANNEL_COMMISSION_ID, CHANNEL_RENT_ID, ChannelFee, CostCategory, CostItem, SalesChannel};

/// The cost line a sales channel adds on top of the user's own items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCost {
    /// Per-unit commission, appended to the variable costs.
    Variable(CostItem),
    /// Monthly store rent, appended to the fixed costs.
    Fixed(CostItem),
}

impl ChannelCost {
    pub fn category(&self) -> CostCategory {
        match self {
            Self::Variable(_) => CostCategory::Variable,
            Self::Fixed(_) => CostCategory::Fixed,
        }
    }

    pub fn item(&self) -> &CostItem {
        match self {
            Self::Variable(item) | Self::Fixed(item) => item,
        }
    }
}

/// Translates a sales channel into the cost line it implies.
///
/// - Online platforms and percentage fees become a per-unit variable
///   commission, `price × rate / 100` rounded to whole won.
/// - Flat per-unit fees become a variable commission of that amount.
/// - Offline stores become a fixed monthly rent for the region.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::{CostCategory, Platform, SalesChannel};
/// use econ_core::calculations::channel_cost;
///
/// let channel = SalesChannel::Online {
///     platform: Platform::SmartStore,
///     commission_percent: None,
/// };
///
/// let cost = channel_cost(&channel, dec!(50000));
///
/// assert_eq!(cost.category(), CostCategory::Variable);
/// assert_eq!(cost.item().amount, dec!(2000)); // 4% of 50,000
/// ```
pub fn channel_cost(
    channel: &SalesChannel,
    price: Decimal,
) -> ChannelCost {
    match channel {
        SalesChannel::Online {
            platform,
            commission_percent,
        } => commission(percent_of(price, platform.commission_percent(*commission_percent))),
        SalesChannel::Custom {
            fee: ChannelFee::Percent(percent),
        } => commission(percent_of(price, *percent)),
        SalesChannel::Custom {
            fee: ChannelFee::PerUnit(amount),
        } => commission(*amount),
        SalesChannel::Offline { region } => ChannelCost::Fixed(CostItem::new(
            CHANNEL_RENT_ID,
            "임대료",
            region.monthly_rent(),
        )),
    }
}

fn percent_of(
    price: Decimal,
    percent: Decimal,
) -> Decimal {
    round_to_won(price.saturating_mul(percent) / dec!(100))
}

fn commission(amount: Decimal) -> ChannelCost {
    ChannelCost::Variable(CostItem::new(CHANNEL_COMMISSION_ID, "수수료", amount))
}
