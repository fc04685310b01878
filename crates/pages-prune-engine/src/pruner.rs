use crate::filter::{DeletionFilter, PrunePolicy};
use crate::{DeletionExecutor, DeploymentLister, Result, resolve_production_deployment};
use pages_prune_api::{Deployment, PagesApi};
use pages_prune_config::{Config, Mode};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_pages: u32,
    pub pages_visited: u32,
    /// Deployments examined, eligible or not.
    pub total: u32,
    pub deleted: u32,
    pub failed: u32,
    /// The deletion budget ended the run before every page was visited.
    pub stopped_early: bool,
}

/// Walks a project's deployments from the oldest page to the newest and
/// deletes the ones selected by the run mode, up to `max_deletes`.
pub struct Pruner {
    api: Arc<dyn PagesApi>,
    lister: DeploymentLister,
    executor: DeletionExecutor,
    mode: Mode,
    max_deletes: u32,
    page_throttle: Duration,
}

impl Pruner {
    pub fn new(api: Arc<dyn PagesApi>, config: &Config) -> Self {
        Self {
            lister: DeploymentLister::new(api.clone(), config.project_name.clone()),
            executor: DeletionExecutor::new(
                api.clone(),
                config.project_name.clone(),
                config.delete_throttle,
            ),
            api,
            mode: config.mode.clone(),
            max_deletes: config.max_deletes,
            page_throttle: config.page_throttle,
        }
    }

    async fn policy(&self) -> Result<PrunePolicy> {
        match self.mode {
            Mode::Skipped => Ok(PrunePolicy::skipped()),
            Mode::NonProduction { keep_first_n_pages } => {
                let production_id = resolve_production_deployment(self.api.as_ref()).await?;
                Ok(PrunePolicy::non_production(production_id, keep_first_n_pages))
            }
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let policy = self.policy().await?;

        let total_pages = self.lister.total_pages().await?;

        if policy.protected_pages > 0 {
            info!(
                "Keeping first {} pages of deployments",
                policy.protected_pages
            );
        }

        let mut summary = RunSummary {
            total_pages,
            ..Default::default()
        };

        for page in (1..=total_pages).rev() {
            if policy.is_protected(page) {
                info!(
                    "Skipping page {} as it's in the protected first {} pages",
                    page, policy.protected_pages
                );
                continue;
            }

            info!("Processing page {}/{}", page, total_pages);

            let deployments = self.lister.page(page).await?;
            summary.pages_visited += 1;

            if deployments.is_empty() {
                info!("No deployments found on page {}, skipping", page);
                continue;
            }

            let deployments = policy.order.arrange(deployments);

            if self
                .process_page(deployments, &policy.filter, &mut summary)
                .await
                .is_break()
            {
                summary.stopped_early = true;
                info!(
                    "Stopped after deleting {} {} deployments",
                    summary.deleted,
                    policy.filter.describe()
                );
                break;
            }

            info!("Finished processing page {}", page);
            tokio::time::sleep(self.page_throttle).await;
        }

        info!(
            "Summary: Processed {} deployments. Deleted {} {} deployments ({} failed)",
            summary.total,
            summary.deleted,
            policy.filter.describe(),
            summary.failed
        );

        Ok(summary)
    }

    /// Breaks once the deletion budget is used up.
    async fn process_page(
        &self,
        deployments: Vec<Deployment>,
        filter: &DeletionFilter,
        summary: &mut RunSummary,
    ) -> ControlFlow<()> {
        for deployment in deployments {
            summary.total += 1;

            if !filter.is_eligible(&deployment) {
                match filter {
                    DeletionFilter::ExcludeProduction { .. } => {
                        info!("Keeping production deployment: {}", deployment.id)
                    }
                    DeletionFilter::Skipped => {
                        debug!("Keeping deployment {}", deployment.short_id)
                    }
                }
                continue;
            }

            if summary.deleted >= self.max_deletes {
                return ControlFlow::Break(());
            }

            match self.executor.delete(&deployment).await {
                Ok(()) => summary.deleted += 1,
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                }
            }

            if summary.deleted >= self.max_deletes {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }
}
