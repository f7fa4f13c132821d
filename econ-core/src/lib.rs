pub mod calculations;
pub mod config;
pub mod models;
pub mod report;
pub mod sample;
pub mod state;

pub use config::{EngineConfig, EngineConfigError};
pub use models::*;
pub use state::{EffectiveCosts, WizardAction, WizardError, WizardState};
