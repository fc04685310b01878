mod cloudflare;
mod endpoints;
mod error;
mod provider;

pub use cloudflare::CloudflarePagesClient;
pub use error::{ApiError, Result};
pub use provider::{Deployment, DeploymentPage, DeploymentSummary, PagesApi, Project, ResultInfo};
