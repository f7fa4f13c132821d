//! Engine configuration.
//!
//! Business-policy values that the calculations depend on but that are not
//! user input: the assumed monthly sales volume, the label of the synthetic
//! loan line and the margin thresholds behind the advisories.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating an [`EngineConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineConfigError {
    /// The assumed monthly volume must be non-negative.
    #[error("monthly volume must be non-negative, got {0}")]
    InvalidMonthlyVolume(Decimal),

    /// Margin thresholds must be non-negative.
    #[error("margin threshold must be non-negative, got {0}")]
    NegativeThreshold(Decimal),

    /// The low-margin threshold must sit below the high-margin one.
    #[error("low margin threshold {low} must be below high margin threshold {high}")]
    ThresholdOrder { low: Decimal, high: Decimal },

    /// The loan line needs a visible name.
    #[error("loan item label must not be empty")]
    EmptyLoanLabel,
}

/// Configuration for unit economics calculations.
///
/// Every field has a default, so a partial TOML table only overrides what
/// it names.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use econ_core::EngineConfig;
///
/// let config = EngineConfig {
///     monthly_volume: dec!(1000),
///     ..EngineConfig::default()
/// };
///
/// assert_eq!(config.validate(), Ok(()));
/// assert_eq!(config.loan_item_label, "대출이자");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Units assumed to be sold per month when projecting monthly profit.
    ///
    /// Defaults to 2,500. Whether this should vary by channel or product
    /// category is still an open product question.
    pub monthly_volume: Decimal,

    /// Name shown for the synthetic loan-payment fixed-cost line.
    pub loan_item_label: String,

    /// Margin percentage at or above which costs may be under-reported.
    pub high_margin_threshold: Decimal,

    /// Margin percentage below which profitability is at risk.
    pub low_margin_threshold: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            monthly_volume: dec!(2500),
            loan_item_label: "대출이자".to_string(),
            high_margin_threshold: dec!(20),
            low_margin_threshold: dec!(10),
        }
    }
}

impl EngineConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineConfigError`] if:
    /// - `monthly_volume` is negative
    /// - either margin threshold is negative
    /// - `low_margin_threshold` is not below `high_margin_threshold`
    /// - `loan_item_label` is blank
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.monthly_volume < Decimal::ZERO {
            return Err(EngineConfigError::InvalidMonthlyVolume(self.monthly_volume));
        }
        for threshold in [self.low_margin_threshold, self.high_margin_threshold] {
            if threshold < Decimal::ZERO {
                return Err(EngineConfigError::NegativeThreshold(threshold));
            }
        }
        if self.low_margin_threshold >= self.high_margin_threshold {
            return Err(EngineConfigError::ThresholdOrder {
                low: self.low_margin_threshold,
                high: self.high_margin_threshold,
            });
        }
        if self.loan_item_label.trim().is_empty() {
            return Err(EngineConfigError::EmptyLoanLabel);
        }
        Ok(())
    }
}
