use rust_decimal::Decimal;
use thiserror::Error;

/// Product or loan input outside its allowed range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("target price must be non-negative, got {0}")]
    NegativePrice(Decimal),

    #[error("loan principal must be non-negative, got {0}")]
    NegativePrincipal(Decimal),

    #[error("loan annual rate must be non-negative, got {0}")]
    NegativeRate(Decimal),
}
