pub mod export;
pub mod loader;
pub mod scenario;

pub use export::{ExportError, write_report};
pub use loader::{CostItemLoader, CostItemLoaderError, CostItemRecord};
pub use scenario::{ScenarioError, ScenarioFile};
