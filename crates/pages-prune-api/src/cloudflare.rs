use crate::endpoints::{DeleteDeployment, ListDeployments, ListDeploymentsParams, ProjectDetails};
use crate::provider::{DeploymentPage, PagesApi, Project, ResultInfo};
use crate::{ApiError, Result};
use async_trait::async_trait;
use cloudflare::framework::Environment;
use cloudflare::framework::auth::Credentials;
use cloudflare::framework::client::ClientConfig;
use cloudflare::framework::client::async_api::Client;
use pages_prune_config::{Config, constants};
use reqwest::Url;
use tracing::debug;

pub struct CloudflarePagesClient {
    client: Client,
    account_identifier: String,
    project_name: String,
}

impl CloudflarePagesClient {
    pub fn new(
        credentials: Credentials,
        environment: Environment,
        account_id: String,
        project_name: String,
    ) -> Result<Self> {
        let config = ClientConfig {
            http_timeout: constants::HTTP_TIMEOUT,
            ..Default::default()
        };
        let client = Client::new(credentials, config, environment)?;

        Ok(Self {
            client,
            account_identifier: account_id,
            project_name,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            credentials(config),
            environment(&config.api_base_url)?,
            config.account_id.clone(),
            config.project_name.clone(),
        )
    }
}

/// A global API key when an account email is set, otherwise an API token.
fn credentials(config: &Config) -> Credentials {
    match &config.auth_email {
        Some(email) => Credentials::UserAuthKey {
            email: email.clone(),
            key: config.api_token.clone(),
        },
        None => Credentials::UserAuthToken {
            token: config.api_token.clone(),
        },
    }
}

fn environment(api_base_url: &str) -> Result<Environment> {
    if api_base_url == constants::DEFAULT_API_BASE_URL {
        return Ok(Environment::Production);
    }

    // Endpoint paths are joined onto the base, which only keeps its own
    // path when it ends in a slash.
    let base = format!("{}/", api_base_url.trim_end_matches('/'));
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: api_base_url.to_string(),
        reason,
    };

    let url = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }

    Ok(Environment::Custom(base))
}

#[async_trait]
impl PagesApi for CloudflarePagesClient {
    async fn list_deployments(&self, page: u32, per_page: u32) -> Result<DeploymentPage> {
        let response = self
            .client
            .request(&ListDeployments {
                account_identifier: &self.account_identifier,
                project_name: &self.project_name,
                params: ListDeploymentsParams { per_page, page },
            })
            .await?;

        let result_info = response
            .result_info
            .map(serde_json::from_value::<ResultInfo>)
            .transpose()?;

        debug!(
            "Listed page {} of {} deployments: {:?}",
            page, self.project_name, result_info
        );

        Ok(DeploymentPage {
            deployments: response.result.0.unwrap_or_default(),
            result_info,
        })
    }

    async fn get_project(&self) -> Result<Project> {
        let response = self
            .client
            .request(&ProjectDetails {
                account_identifier: &self.account_identifier,
                project_name: &self.project_name,
            })
            .await?;

        Ok(response.result)
    }

    async fn delete_deployment(&self, deployment_id: &str, force: bool) -> Result<()> {
        self.client
            .request(&DeleteDeployment {
                account_identifier: &self.account_identifier,
                project_name: &self.project_name,
                identifier: deployment_id,
                force,
            })
            .await?;

        Ok(())
    }
}
