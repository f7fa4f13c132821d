//! Unit economics calculations.
//!
//! Each module is a pure function over plain data: totals, loan
//! amortization, the effective fixed-cost overlay, derived metrics, the
//! sales-channel overlay and the cost composition breakdown.

mod aggregation;
mod channel;
pub mod common;
mod composition;
mod fixed_costs;
mod loan;
mod metrics;

pub use aggregation::sum;
pub use channel::{ChannelCost, channel_cost};
pub use composition::{CompositionView, CostShare, cost_composition};
pub use fixed_costs::effective_fixed;
pub use loan::loan_payment;
pub use metrics::{MarginAdvisory, compute_metrics};

pub use crate::models::LOAN_ITEM_ID;
