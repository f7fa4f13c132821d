mod channel;
mod cost_item;
mod derived_metrics;
mod input_error;
mod loan_terms;
mod pricing_input;

pub use channel::{ChannelFee, ChannelFeeError, Platform, Region, SalesChannel};
pub use cost_item::{
    CHANNEL_COMMISSION_ID, CHANNEL_RENT_ID, CostCategory, CostCollection, CostCollectionError,
    CostCollections, CostItem, LOAN_ITEM_ID, RESERVED_IDS,
};
pub use derived_metrics::DerivedMetrics;
pub use input_error::InputError;
pub use loan_terms::LoanTerms;
pub use pricing_input::PricingInput;
