//! Wizard state and its reducer.
//!
//! The wizard walks through product, channel and cost entry. Its whole
//! state is one value; every edit goes through [`WizardState::apply`] and
//! every figure shown to the user is a projection recomputed from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{
    ChannelCost, CompositionView, CostShare, MarginAdvisory, channel_cost, compute_metrics,
    cost_composition, effective_fixed,
};
use crate::config::EngineConfig;
use crate::report::{CsvExport, ReportRow, build_report};
use crate::{
    CostCategory, CostCollectionError, CostCollections, CostItem, DerivedMetrics, InputError,
    LoanTerms, PricingInput, SalesChannel, sample,
};

/// Reasons a wizard action is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Cost(#[from] CostCollectionError),
}

/// One user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SetProductName(String),
    SetTargetPrice(Decimal),
    SelectChannel(SalesChannel),
    ClearChannel,
    /// Adds a user item. The name is trimmed and a blank name is ignored,
    /// here and in `RenameCost`.
    AddCost {
        category: CostCategory,
        name: String,
        amount: Decimal,
    },
    EditCostAmount {
        category: CostCategory,
        id: String,
        amount: Decimal,
    },
    RenameCost {
        category: CostCategory,
        id: String,
        name: String,
    },
    RemoveCost {
        category: CostCategory,
        id: String,
    },
    SetLoanTerms(LoanTerms),
    SetLoanIncluded(bool),
}

/// Cost collections as the calculations see them: user items plus the
/// synthetic channel and loan lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveCosts {
    pub fixed: Vec<CostItem>,
    pub variable: Vec<CostItem>,
    pub sunk: Vec<CostItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub pricing: PricingInput,
    pub channel: Option<SalesChannel>,
    pub costs: CostCollections,
    pub loan: LoanTerms,
    #[serde(default = "first_id")]
    next_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(
            PricingInput::default(),
            None,
            CostCollections::default(),
            LoanTerms::default(),
        )
    }
}

impl WizardState {
    pub fn new(
        pricing: PricingInput,
        channel: Option<SalesChannel>,
        costs: CostCollections,
        loan: LoanTerms,
    ) -> Self {
        Self {
            pricing,
            channel,
            costs,
            loan,
            next_id: first_id(),
        }
    }

    /// The demonstration scenario: sample product and costs, no channel,
    /// loan excluded.
    pub fn sample() -> Self {
        Self::new(sample::pricing(), None, sample::costs(), LoanTerms::default())
    }

    /// Applies one action and returns the next state.
    ///
    /// A rejected action is logged and leaves the state exactly as it was.
    pub fn apply(
        mut self,
        action: WizardAction,
    ) -> Self {
        if let Err(e) = self.try_apply(action) {
            warn!(error = %e, "Wizard action rejected; state unchanged");
        }
        self
    }

    fn try_apply(
        &mut self,
        action: WizardAction,
    ) -> Result<(), WizardError> {
        match action {
            WizardAction::SetProductName(name) => self.pricing.product_name = name,
            WizardAction::SetTargetPrice(price) => {
                PricingInput::validate_price(price)?;
                self.pricing.target_price = price;
            }
            WizardAction::SelectChannel(channel) => self.channel = Some(channel),
            WizardAction::ClearChannel => self.channel = None,
            WizardAction::AddCost {
                category,
                name,
                amount,
            } => self.add_cost(category, &name, amount)?,
            WizardAction::EditCostAmount {
                category,
                id,
                amount,
            } => self.costs.get_mut(category).set_amount(&id, amount)?,
            WizardAction::RenameCost { category, id, name } => {
                self.rename_cost(category, &id, &name)?
            }
            WizardAction::RemoveCost { category, id } => {
                self.costs.get_mut(category).remove(&id)?;
            }
            WizardAction::SetLoanTerms(terms) => {
                terms.validate()?;
                self.loan = terms;
            }
            WizardAction::SetLoanIncluded(included) => self.loan.included = included,
        }
        Ok(())
    }

    fn add_cost(
        &mut self,
        category: CostCategory,
        name: &str,
        amount: Decimal,
    ) -> Result<(), WizardError> {
        let name = name.trim();
        if name.is_empty() {
            debug!(category = category.as_str(), "Ignoring cost item with blank name");
            return Ok(());
        }
        if amount < Decimal::ZERO {
            warn!(
                category = category.as_str(),
                name,
                amount = %amount,
                "Negative cost amount accepted as entered"
            );
        }

        let id = self.generate_id(category);
        self.costs
            .get_mut(category)
            .push(CostItem::new(id, name, amount))?;
        Ok(())
    }

    fn rename_cost(
        &mut self,
        category: CostCategory,
        id: &str,
        name: &str,
    ) -> Result<(), WizardError> {
        let name = name.trim();
        if name.is_empty() {
            debug!(category = category.as_str(), id, "Ignoring blank rename");
            return Ok(());
        }
        self.costs.get_mut(category).rename(id, name)?;
        Ok(())
    }

    /// Next `"<category>-<n>"` id not already used in the collection.
    fn generate_id(
        &mut self,
        category: CostCategory,
    ) -> String {
        loop {
            let id = format!("{}-{}", category.as_str(), self.next_id);
            self.next_id += 1;
            if !self.costs.get(category).contains(&id) {
                return id;
            }
        }
    }

    // =========================================================================
    // Readiness
    // =========================================================================

    /// Product name and a positive price have been entered.
    pub fn product_ready(&self) -> bool {
        self.pricing.is_complete()
    }

    pub fn channel_ready(&self) -> bool {
        self.channel.is_some()
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// User items with the channel line and, when included, the loan line
    /// appended. Fixed order is user items, store rent, loan payment.
    pub fn effective_costs(
        &self,
        config: &EngineConfig,
    ) -> EffectiveCosts {
        let mut fixed = self.costs.fixed.items().to_vec();
        let mut variable = self.costs.variable.items().to_vec();

        if let Some(channel) = &self.channel {
            match channel_cost(channel, self.pricing.target_price) {
                ChannelCost::Fixed(item) => fixed.push(item),
                ChannelCost::Variable(item) => variable.push(item),
            }
        }

        let fixed = effective_fixed(&fixed, &self.loan, &config.loan_item_label).into_owned();

        EffectiveCosts {
            fixed,
            variable,
            sunk: self.costs.sunk.items().to_vec(),
        }
    }

    pub fn metrics(
        &self,
        config: &EngineConfig,
    ) -> DerivedMetrics {
        let costs = self.effective_costs(config);
        self.metrics_for(&costs, config)
    }

    pub fn composition(
        &self,
        config: &EngineConfig,
        view: CompositionView,
    ) -> Vec<CostShare> {
        let costs = self.effective_costs(config);
        cost_composition(&costs.fixed, &costs.variable, view)
    }

    pub fn advisory(
        &self,
        config: &EngineConfig,
    ) -> MarginAdvisory {
        MarginAdvisory::assess(self.metrics(config).margin_percent, config)
    }

    pub fn report(
        &self,
        config: &EngineConfig,
    ) -> Vec<ReportRow> {
        let costs = self.effective_costs(config);
        let metrics = self.metrics_for(&costs, config);
        build_report(
            &self.pricing,
            &metrics,
            &costs.variable,
            &costs.fixed,
            &costs.sunk,
        )
    }

    pub fn export(
        &self,
        config: &EngineConfig,
    ) -> CsvExport {
        CsvExport::from_rows(&self.report(config))
    }

    fn metrics_for(
        &self,
        costs: &EffectiveCosts,
        config: &EngineConfig,
    ) -> DerivedMetrics {
        compute_metrics(
            self.pricing.target_price,
            &costs.variable,
            &costs.fixed,
            &costs.sunk,
            config.monthly_volume,
        )
    }
}
