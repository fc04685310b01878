use cloudflare::framework::response::ApiFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cloudflare API error: {0}")]
    CloudflareApi(#[from] cloudflare::framework::Error),

    #[error("{}", failure_message(.0))]
    CloudflareApiFailure(#[from] ApiFailure),

    #[error("Invalid Cloudflare API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid CF_API_BASE_URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// The first error the API reported, falling back to the HTTP status.
fn failure_message(failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::Error(status, errors) => match errors.errors.first() {
            Some(info) => info.message.clone(),
            None => format!("HTTP {status}"),
        },
        ApiFailure::Invalid(e) => e.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
