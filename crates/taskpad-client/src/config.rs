//! Base URL and timeout configuration.

use std::time::Duration;

use url::Url;

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "TASKPAD_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TASKPAD_HTTP_TIMEOUT_SECS";

/// Invalid client configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL did not parse or is not an http(s) URL.
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl {
        /// Offending input.
        value: String,
        /// Parser or validation detail.
        reason: String,
    },
    /// The timeout was not a positive integer number of seconds.
    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Connection settings shared by every client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host, and port of the Taskpad API.
    pub base_url: Url,
    /// Per-request timeout (native transports only).
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `base_url` with the default timeout.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidUrl`] when `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error when a provided value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_API_URL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&base_url)?;
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|value| !value.trim().is_empty()) {
            config.timeout = parse_timeout_secs(&raw)?;
        }
        Ok(config)
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parse and validate an API base URL.
///
/// # Errors
/// Returns [`ConfigError::InvalidUrl`] for unparsable or non-http(s) input.
pub fn parse_base_url(input: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: input.to_string(),
        reason,
    };
    let url = input
        .trim()
        .parse::<Url>()
        .map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() -> anyhow::Result<()> {
        let config = ClientConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Ok(())
    }

    #[test]
    fn environment_overrides_defaults() -> anyhow::Result<()> {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://tasks.example.test"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))?;
        assert_eq!(config.base_url.host_str(), Some("tasks.example.test"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://files")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "not a url")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
    }
}
