use crate::{PruneError, Result};
use pages_prune_api::{Deployment, PagesApi};
use pages_prune_config::constants;
use std::sync::Arc;
use tracing::info;

/// Fetches fixed-size pages of deployments. Page 1 is the newest.
pub struct DeploymentLister {
    api: Arc<dyn PagesApi>,
    project_name: String,
}

impl DeploymentLister {
    pub fn new(api: Arc<dyn PagesApi>, project_name: impl Into<String>) -> Self {
        Self {
            api,
            project_name: project_name.into(),
        }
    }

    /// Fetches page 1 only for its pagination metadata; its records are
    /// listed again when the walk reaches page 1. A response without
    /// metadata is treated as an empty project.
    pub async fn total_pages(&self) -> Result<u32> {
        let page = self
            .api
            .list_deployments(1, constants::DEPLOYMENTS_PER_PAGE)
            .await
            .map_err(|e| {
                PruneError::fetch(format!("deployments for {} (page 1)", self.project_name), e)
            })?;

        let total_pages = page.result_info.map(|i| i.total_pages).unwrap_or(0);
        info!("Total pages: {}", total_pages);

        Ok(total_pages)
    }

    pub async fn page(&self, page: u32) -> Result<Vec<Deployment>> {
        let response = self
            .api
            .list_deployments(page, constants::DEPLOYMENTS_PER_PAGE)
            .await
            .map_err(|e| {
                PruneError::fetch(
                    format!("deployments for {} (page {})", self.project_name, page),
                    e,
                )
            })?;

        info!(
            "Found {} deployments on page {}",
            response.deployments.len(),
            page
        );

        Ok(response.deployments)
    }
}
