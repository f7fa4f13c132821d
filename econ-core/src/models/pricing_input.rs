use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InputError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingInput {
    pub product_name: String,
    pub target_price: Decimal,
}

impl PricingInput {
    pub fn new(
        product_name: impl Into<String>,
        target_price: Decimal,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            target_price,
        }
    }

    /// Whether the product step has enough input to move on: a non-blank
    /// name and a positive price.
    pub fn is_complete(&self) -> bool {
        !self.product_name.trim().is_empty() && self.target_price > Decimal::ZERO
    }

    /// A zero price is allowed (the product step is simply not complete);
    /// a negative one is not.
    pub fn validate(&self) -> Result<(), InputError> {
        Self::validate_price(self.target_price)
    }

    pub fn validate_price(price: Decimal) -> Result<(), InputError> {
        if price < Decimal::ZERO {
            return Err(InputError::NegativePrice(price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_price_is_valid_but_incomplete() {
        let pricing = PricingInput::new("비누", dec!(0));

        assert_eq!(pricing.validate(), Ok(()));
        assert!(!pricing.is_complete());
    }

    #[test]
    fn negative_price_is_invalid() {
        let pricing = PricingInput::new("비누", dec!(-5000));

        assert_eq!(pricing.validate(), Err(InputError::NegativePrice(dec!(-5000))));
    }
}
