//! TOML scenario files.
//!
//! A scenario describes everything except the cost items: engine settings,
//! the product, the sales channel and the loan. Every table is optional.
//!
//! ```toml
//! [engine]
//! monthly_volume = 2500
//!
//! [product]
//! product_name = "수제 비누"
//! target_price = 12000
//!
//! [channel]
//! kind = "online"
//! platform = "11st"
//! commission_percent = 8
//!
//! [loan]
//! principal = 10000000
//! annual_rate_percent = 6
//! term_months = 12
//! included = true
//! ```

use std::path::Path;

use econ_core::{
    CostCollections, EngineConfig, EngineConfigError, InputError, LoanTerms, PricingInput,
    SalesChannel, WizardState,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [engine] settings: {0}")]
    Config(#[from] EngineConfigError),

    #[error("invalid [product] or [loan] values: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioFile {
    pub engine: EngineConfig,
    pub product: PricingInput,
    pub channel: Option<SalesChannel>,
    pub loan: LoanTerms,
}

impl ScenarioFile {
    /// Reads and validates a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parses scenario TOML and validates its `[engine]`, `[product]` and
    /// `[loan]` tables.
    pub fn parse(contents: &str) -> Result<Self, ScenarioError> {
        let scenario: ScenarioFile = toml::from_str(contents)?;
        scenario.engine.validate()?;
        scenario.product.validate()?;
        scenario.loan.validate()?;
        Ok(scenario)
    }

    /// Builds the wizard state for this scenario with the given cost items.
    pub fn into_state(
        self,
        costs: CostCollections,
    ) -> (EngineConfig, WizardState) {
        let state = WizardState::new(self.product, self.channel, costs, self.loan);
        (self.engine, state)
    }

    /// Builds the sample wizard state with this scenario's engine settings,
    /// channel and loan. The sample keeps its own product and costs, so a
    /// `[product]` table is ignored with a warning.
    pub fn into_sample_state(self) -> (EngineConfig, WizardState) {
        if self.product != PricingInput::default() {
            warn!(
                product = %self.product.product_name,
                "Sample scenario ignores the [product] table"
            );
        }
        let mut state = WizardState::sample();
        state.channel = self.channel;
        state.loan = self.loan;
        (self.engine, state)
    }
}

#[cfg(test)]
mod tests {
    use econ_core::{ChannelFee, Platform, Region};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let scenario = ScenarioFile::parse("").expect("empty TOML is a valid scenario");

        assert_eq!(scenario, ScenarioFile::default());
        assert_eq!(scenario.engine.monthly_volume, dec!(2500));
    }

    #[test]
    fn test_full_scenario() {
        let toml = r#"
[engine]
monthly_volume = 1000
loan_item_label = "사업자 대출"

[product]
product_name = "수제 비누"
target_price = 12000

[channel]
kind = "online"
platform = "11st"
commission_percent = 8

[loan]
principal = 10000000
annual_rate_percent = "4.5"
term_months = 36
included = true
"#;

        let scenario = ScenarioFile::parse(toml).expect("Failed to parse scenario");

        assert_eq!(scenario.engine.monthly_volume, dec!(1000));
        assert_eq!(scenario.engine.loan_item_label, "사업자 대출");
        assert_eq!(scenario.engine.high_margin_threshold, dec!(20));
        assert_eq!(scenario.product, PricingInput::new("수제 비누", dec!(12000)));
        assert_eq!(
            scenario.channel,
            Some(SalesChannel::Online {
                platform: Platform::ElevenStreet,
                commission_percent: Some(dec!(8)),
            })
        );
        assert_eq!(
            scenario.loan,
            LoanTerms {
                principal: dec!(10000000),
                annual_rate_percent: dec!(4.5),
                term_months: 36,
                included: true,
            }
        );
    }

    #[test]
    fn test_offline_and_custom_channels() {
        let offline = ScenarioFile::parse("[channel]\nkind = \"offline\"\nregion = \"jeolla\"")
            .expect("offline channel");
        let custom = ScenarioFile::parse("[channel]\nkind = \"custom\"\nfee = \"8.5%\"")
            .expect("custom channel");

        assert_eq!(
            offline.channel,
            Some(SalesChannel::Offline {
                region: Region::Jeolla
            })
        );
        assert_eq!(
            custom.channel,
            Some(SalesChannel::Custom {
                fee: ChannelFee::Percent(dec!(8.5))
            })
        );
    }

    #[test]
    fn test_unparseable_custom_fee_is_rejected() {
        let err = ScenarioFile::parse("[channel]\nkind = \"custom\"\nfee = \"cheap\"")
            .expect_err("fee text should be rejected");

        assert!(matches!(err, ScenarioError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_invalid_engine_settings_are_rejected() {
        let err = ScenarioFile::parse("[engine]\nlow_margin_threshold = 50")
            .expect_err("low threshold above high should fail");

        assert!(
            matches!(err, ScenarioError::Config(EngineConfigError::ThresholdOrder { .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = ScenarioFile::parse("[product]\nproduct_name = \"비누\"\ntarget_price = -5000")
            .expect_err("negative price should fail");

        assert!(
            matches!(err, ScenarioError::Input(InputError::NegativePrice(_))),
            "got {err:?}"
        );
    }

    #[test]
    fn test_negative_loan_terms_are_rejected() {
        for (toml, expected) in [
            (
                "[loan]\nprincipal = -10\nannual_rate_percent = 6",
                InputError::NegativePrincipal(dec!(-10)),
            ),
            (
                "[loan]\nprincipal = 10000000\nannual_rate_percent = -6",
                InputError::NegativeRate(dec!(-6)),
            ),
        ] {
            let err = ScenarioFile::parse(toml).expect_err("negative loan terms should fail");

            match err {
                ScenarioError::Input(input) => assert_eq!(input, expected),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let err = ScenarioFile::parse("[products]\nproduct_name = \"x\"")
            .expect_err("typo in table name should fail");

        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_into_state_keeps_inputs() {
        let scenario = ScenarioFile::parse("[product]\nproduct_name = \"비누\"\ntarget_price = 1000")
            .expect("Failed to parse scenario");

        let (config, state) = scenario.into_state(CostCollections::default());

        assert_eq!(config, EngineConfig::default());
        assert!(state.product_ready());
        assert!(!state.channel_ready());
    }

    #[test]
    fn test_sample_state_keeps_sample_product() {
        let toml = r#"
[product]
product_name = "다른 상품"
target_price = 1000

[channel]
kind = "offline"
region = "seoul"

[loan]
principal = 10000000
annual_rate_percent = 6
term_months = 12
included = true
"#;
        let scenario = ScenarioFile::parse(toml).expect("Failed to parse scenario");
        let loan = scenario.loan.clone();

        let (_, state) = scenario.into_sample_state();

        assert_eq!(state.pricing, WizardState::sample().pricing);
        assert_eq!(state.costs, WizardState::sample().costs);
        assert_eq!(state.channel, Some(SalesChannel::Offline { region: Region::Seoul }));
        assert_eq!(state.loan, loan);
    }
}
