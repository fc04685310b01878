use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// The subset of the Pages API the pruner needs. Implementations are scoped
/// to a single account and project.
#[async_trait]
pub trait PagesApi: Send + Sync {
    /// Lists one page of deployments, newest first. Page 1 is the newest.
    async fn list_deployments(&self, page: u32, per_page: u32) -> Result<DeploymentPage>;

    async fn get_project(&self) -> Result<Project>;

    /// `force` also removes deployments that are still aliased.
    async fn delete_deployment(&self, deployment_id: &str, force: bool) -> Result<()>;
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Deployment {
    pub id: String,
    #[serde(default)]
    pub short_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub is_skipped: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentPage {
    pub deployments: Vec<Deployment>,
    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeploymentSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub short_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub canonical_deployment: Option<DeploymentSummary>,
}
