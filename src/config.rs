//! Client configuration

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

/// Environment variable holding the service base URL
pub const BASE_URL_ENV: &str = "ADMIN_EVENT_BASE_URL";
/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "ADMIN_EVENT_TOKEN";
/// Optional environment variable holding a request timeout in seconds
pub const TIMEOUT_ENV: &str = "ADMIN_EVENT_TIMEOUT_SECS";

/// Configuration for the admin event client
///
/// A client holds its configuration by value. Replacing it goes through
/// [`Client::set_config`](crate::Client::set_config) or
/// [`Client::with_config`](crate::Client::with_config), never field mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL (e.g., "https://api.example.com"), joined verbatim with operation paths
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header
    pub token: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration without a timeout
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Bound every request by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a new configuration from environment variables
    ///
    /// Required environment variables:
    /// - `ADMIN_EVENT_BASE_URL`
    /// - `ADMIN_EVENT_TOKEN`
    ///
    /// `ADMIN_EVENT_TIMEOUT_SECS` is optional.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var(BASE_URL_ENV).map_err(|_| Error::Env(format!("{BASE_URL_ENV} not set")))?;
        let token = env::var(TOKEN_ENV).map_err(|_| Error::Env(format!("{TOKEN_ENV} not set")))?;
        let timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            token,
            timeout,
        })
    }

    pub(crate) fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::Env(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}")))
}
