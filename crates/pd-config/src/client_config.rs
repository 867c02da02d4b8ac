use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENDPOINT};

use std::time::Duration;

use serde::Deserialize;
use url::Url;

// Timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the directory's GraphQL endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute http(s) URL of the GraphQL endpoint
    pub endpoint: String,
    /// Upper bound for a single request-response exchange
    pub timeout_secs: u64,
    /// Sent as a bearer token when present
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse the endpoint as an absolute http(s) URL
    pub fn endpoint_url(&self) -> ConfigErrorResult<Url> {
        let url = Url::parse(self.endpoint.trim()).map_err(|e| {
            ConfigError::client(format!(
                "client.endpoint '{}' is not a valid URL: {}",
                self.endpoint, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ConfigError::client(format!(
                "client.endpoint must be an http:// or https:// URL, got '{}'",
                self.endpoint
            )));
        }

        Ok(url)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.endpoint_url()?;

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::client(format!(
                "client.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if let Some(token) = &self.auth_token
            && token.trim().is_empty()
        {
            return Err(ConfigError::client("client.auth_token must not be blank"));
        }

        Ok(())
    }
}
