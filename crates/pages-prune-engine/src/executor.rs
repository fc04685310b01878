use crate::DeleteError;
use pages_prune_api::{Deployment, PagesApi};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Issues forced deletions one at a time, pausing after each success.
pub struct DeletionExecutor {
    api: Arc<dyn PagesApi>,
    project_name: String,
    throttle: Duration,
}

impl DeletionExecutor {
    pub fn new(api: Arc<dyn PagesApi>, project_name: impl Into<String>, throttle: Duration) -> Self {
        Self {
            api,
            project_name: project_name.into(),
            throttle,
        }
    }

    pub async fn delete(&self, deployment: &Deployment) -> Result<(), DeleteError> {
        self.api
            .delete_deployment(&deployment.id, true)
            .await
            .map_err(|source| DeleteError {
                id: deployment.id.clone(),
                short_id: deployment.short_id.clone(),
                source,
            })?;

        info!(
            "Deleted deployment {} (created: {}) for project {}",
            deployment.short_id, deployment.created_on, self.project_name
        );

        tokio::time::sleep(self.throttle).await;

        Ok(())
    }
}
