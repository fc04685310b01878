use crate::provider::{Deployment, Project};
use cloudflare::framework::endpoint::spec::EndpointSpec;
use cloudflare::framework::endpoint::{Method, serialize_query};
use cloudflare::framework::response::{ApiResult, ApiSuccess};
use serde::{Deserialize, Serialize};

/// List Pages deployments, newest first.
#[derive(Debug)]
pub struct ListDeployments<'a> {
    pub account_identifier: &'a str,
    pub project_name: &'a str,
    pub params: ListDeploymentsParams,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListDeploymentsParams {
    pub per_page: u32,
    pub page: u32,
}

impl EndpointSpec for ListDeployments<'_> {
    type JsonResponse = DeploymentList;
    type ResponseType = ApiSuccess<Self::JsonResponse>;

    fn method(&self) -> Method {
        Method::GET
    }
    fn path(&self) -> String {
        format!(
            "accounts/{}/pages/projects/{}/deployments",
            self.account_identifier, self.project_name
        )
    }
    #[inline]
    fn query(&self) -> Option<String> {
        serialize_query(&self.params)
    }
}

/// Get Pages project, including its canonical (production) deployment.
#[derive(Debug)]
pub struct ProjectDetails<'a> {
    pub account_identifier: &'a str,
    pub project_name: &'a str,
}

impl EndpointSpec for ProjectDetails<'_> {
    type JsonResponse = Project;
    type ResponseType = ApiSuccess<Self::JsonResponse>;

    fn method(&self) -> Method {
        Method::GET
    }
    fn path(&self) -> String {
        format!(
            "accounts/{}/pages/projects/{}",
            self.account_identifier, self.project_name
        )
    }
}

/// Delete a Pages deployment. `force` also removes aliased deployments.
#[derive(Debug)]
pub struct DeleteDeployment<'a> {
    pub account_identifier: &'a str,
    pub project_name: &'a str,
    pub identifier: &'a str,
    pub force: bool,
}

impl EndpointSpec for DeleteDeployment<'_> {
    type JsonResponse = ();
    type ResponseType = ApiSuccess<Self::JsonResponse>;

    fn method(&self) -> Method {
        Method::DELETE
    }
    fn path(&self) -> String {
        format!(
            "accounts/{}/pages/projects/{}/deployments/{}",
            self.account_identifier, self.project_name, self.identifier
        )
    }
    #[inline]
    fn query(&self) -> Option<String> {
        self.force.then(|| "force=true".to_string())
    }
}

/// A `null` result is read as an empty page.
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct DeploymentList(pub Option<Vec<Deployment>>);

impl ApiResult for DeploymentList {}
impl ApiResult for Project {}
