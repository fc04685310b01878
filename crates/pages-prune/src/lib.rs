mod telemetry;

use pages_prune_api::CloudflarePagesClient;
use pages_prune_config::{Config, Task};
use pages_prune_engine::Pruner;
use std::sync::Arc;

pub use telemetry::init_tracing;

/// Shared body of both binaries. Loads `.env`, validates configuration
/// before any request is made, then runs the pruner to completion.
pub async fn run(task: Task) -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = match Config::from_env(task) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    match task {
        Task::DeleteSkipped => tracing::info!("Processing and deleting skipped deployments"),
        Task::DeleteNonProduction => {
            tracing::info!("Processing and deleting deployments page by page")
        }
    }

    let client = match CloudflarePagesClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create Cloudflare client: {}", e);
            return Err(e.into());
        }
    };
    let pruner = Pruner::new(Arc::new(client), &config);

    if let Err(e) = pruner.run().await {
        tracing::error!("Run for project {} aborted: {}", config.project_name, e);
        return Err(e.into());
    }

    Ok(())
}
