use crate::{PruneError, Result};
use pages_prune_api::PagesApi;
use tracing::info;

/// Returns the id of the deployment currently serving the project's live
/// traffic.
pub async fn resolve_production_deployment(api: &dyn PagesApi) -> Result<String> {
    let project = api
        .get_project()
        .await
        .map_err(|e| PruneError::fetch("project details", e))?;

    let production_id = project
        .canonical_deployment
        .and_then(|d| d.id)
        .filter(|id| !id.is_empty())
        .ok_or(PruneError::MissingProductionDeployment)?;

    info!(
        "Found live production deployment to exclude from deletion: {}",
        production_id
    );

    Ok(production_id)
}
