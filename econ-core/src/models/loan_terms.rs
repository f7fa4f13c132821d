use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InputError;

/// Terms of a business loan whose monthly payment may be counted as a
/// fixed cost.
///
/// When `included` is false the loan contributes nothing, whatever the
/// other fields hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    #[serde(default)]
    pub principal: Decimal,
    #[serde(default)]
    pub annual_rate_percent: Decimal,
    #[serde(default)]
    pub term_months: u32,
    #[serde(default)]
    pub included: bool,
}

impl LoanTerms {
    /// Principal and rate must be non-negative, included or not.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.principal < Decimal::ZERO {
            return Err(InputError::NegativePrincipal(self.principal));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(InputError::NegativeRate(self.annual_rate_percent));
        }
        Ok(())
    }
}
