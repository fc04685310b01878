use pages_prune_api::ApiError;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        what: String,
        #[source]
        source: ApiError,
    },

    #[error("Unable to fetch production deployment ID")]
    MissingProductionDeployment,
}

impl PruneError {
    pub(crate) fn fetch(what: impl Into<String>, source: ApiError) -> Self {
        PruneError::Fetch {
            what: what.into(),
            source,
        }
    }
}

/// A single failed deletion. Logged by the pruner and never propagated.
#[derive(Debug, Error)]
#[error("Failed to delete deployment {short_id} ({id}): {source}")]
pub struct DeleteError {
    pub id: String,
    pub short_id: String,
    #[source]
    pub source: ApiError,
}

pub type Result<T> = std::result::Result<T, PruneError>;
