use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub const DEPLOYMENTS_PER_PAGE: u32 = 10;

pub const DEFAULT_MAX_DELETES: u32 = 10;
pub const DEFAULT_KEEP_FIRST_N_PAGES: u32 = 1;

pub const DELETE_THROTTLE: Duration = Duration::from_millis(500);
pub const PAGE_THROTTLE: Duration = Duration::from_millis(500);

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_AUTH_EMAIL: &str = "CF_AUTH_EMAIL";
pub const ENV_API_TOKEN: &str = "CF_API_TOKEN";
pub const ENV_ACCOUNT_ID: &str = "CF_ACCOUNT_ID";
pub const ENV_PROJECT_NAME: &str = "CF_PAGES_PROJECT_NAME";
pub const ENV_MAX_DELETES: &str = "MAX_DELETES";
pub const ENV_KEEP_FIRST_N_PAGES: &str = "KEEP_FIRST_N_PAGES";
pub const ENV_API_BASE_URL: &str = "CF_API_BASE_URL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
