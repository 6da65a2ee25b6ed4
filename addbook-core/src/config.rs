//! Runtime configuration

use crate::error::ConfigError;
use crate::feedback::DEFAULT_BANNER_DURATION;
use std::time::Duration;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "ADDBOOK_API_URL";
/// Environment variable holding the banner duration in milliseconds
pub const ENV_BANNER_MS: &str = "ADDBOOK_BANNER_MS";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "ADDBOOK_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookConfig {
    /// Base URL the `/book` path is appended to
    pub api_url: String,

    /// How long a feedback banner stays visible
    pub banner_duration: Duration,

    /// Give up on a request after this long (no limit when `None`)
    pub request_timeout: Option<Duration>,
}

impl Default for AddBookConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            banner_duration: DEFAULT_BANNER_DURATION,
            request_timeout: None,
        }
    }
}

impl AddBookConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = url;
        }

        if let Some(ms) = lookup(ENV_BANNER_MS) {
            config.banner_duration = Duration::from_millis(parse_number(ENV_BANNER_MS, &ms)?);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Some(Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.api_url.clone()));
        }
        Ok(())
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
