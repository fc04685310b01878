mod error;
mod executor;
mod filter;
mod lister;
mod pruner;
mod resolver;

pub use error::{DeleteError, PruneError, Result};
pub use executor::DeletionExecutor;
pub use filter::{DeletionFilter, PageOrder, PrunePolicy};
pub use lister::DeploymentLister;
pub use pruner::{Pruner, RunSummary};
pub use resolver::resolve_production_deployment;
