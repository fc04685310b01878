use crate::constants;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please set {0} as an env variable")]
    Missing(&'static str),

    #[error("KEEP_FIRST_N_PAGES must be a positive integer, got {0:?}")]
    InvalidKeepPages(String),
}

/// Which entry point is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    DeleteSkipped,
    DeleteNonProduction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Delete deployments whose build was skipped.
    Skipped,
    /// Delete everything except the live deployment, leaving the newest
    /// `keep_first_n_pages` pages untouched.
    NonProduction { keep_first_n_pages: u32 },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// API token, or the global API key when `auth_email` is set.
    pub api_token: String,
    pub auth_email: Option<String>,
    pub account_id: String,
    pub project_name: String,
    pub api_base_url: String,
    pub max_deletes: u32,
    pub mode: Mode,
    pub delete_throttle: Duration,
    pub page_throttle: Duration,
}

impl Config {
    pub fn from_env(task: Task) -> Result<Self, ConfigError> {
        Self::from_lookup(task, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values are treated as unset.
    pub fn from_lookup<F>(task: Task, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_token = get(constants::ENV_API_TOKEN)
            .ok_or(ConfigError::Missing(constants::ENV_API_TOKEN))?;
        let account_id = get(constants::ENV_ACCOUNT_ID)
            .ok_or(ConfigError::Missing(constants::ENV_ACCOUNT_ID))?;
        let project_name = get(constants::ENV_PROJECT_NAME)
            .ok_or(ConfigError::Missing(constants::ENV_PROJECT_NAME))?;

        let mode = match task {
            Task::DeleteSkipped => Mode::Skipped,
            Task::DeleteNonProduction => Mode::NonProduction {
                keep_first_n_pages: parse_keep_pages(get(constants::ENV_KEEP_FIRST_N_PAGES))?,
            },
        };

        let api_base_url = get(constants::ENV_API_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| constants::DEFAULT_API_BASE_URL.into());

        Ok(Self {
            api_token,
            auth_email: get(constants::ENV_AUTH_EMAIL),
            account_id,
            project_name,
            api_base_url,
            max_deletes: parse_max_deletes(get(constants::ENV_MAX_DELETES)),
            mode,
            delete_throttle: constants::DELETE_THROTTLE,
            page_throttle: constants::PAGE_THROTTLE,
        })
    }
}

fn parse_max_deletes(raw: Option<String>) -> u32 {
    let Some(raw) = raw else {
        return constants::DEFAULT_MAX_DELETES;
    };

    match leading_integer(&raw) {
        Some(n) => n,
        None => {
            warn!(
                "Ignoring unparseable MAX_DELETES {:?}, using {}",
                raw,
                constants::DEFAULT_MAX_DELETES
            );
            constants::DEFAULT_MAX_DELETES
        }
    }
}

/// Reads an optional sign and the digits that follow, ignoring leading
/// whitespace and any trailing text, so `"5abc"` and `"1.5"` give 5 and 1.
/// Negative values clamp to 0 and oversized ones to `u32::MAX`.
fn leading_integer(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn parse_keep_pages(raw: Option<String>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(constants::DEFAULT_KEEP_FIRST_N_PAGES);
    };

    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidKeepPages(raw)),
    }
}
