//! Client configuration.
//!
//! Use the builder methods or [`TutorConfig::from_env`].
//!
//! ```ignore
//! use steptutor::config::TutorConfig;
//!
//! let config = TutorConfig::new("https://project.example.co")
//!     .with_api_key("anon-key");
//! ```

use std::time::Duration;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "STEPTUTOR_BASE_URL";
/// Environment variable holding the bearer key
pub const API_KEY_ENV: &str = "STEPTUTOR_API_KEY";
/// Environment variable holding the transport timeout in seconds
pub const TIMEOUT_ENV: &str = "STEPTUTOR_TIMEOUT_SECS";

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:54321";

/// Configuration for [`crate::tutor::TutorClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Sent as `Authorization: Bearer <key>` when set
    pub api_key: Option<String>,
    /// Whole-request timeout enforced by the transport
    pub request_timeout: Option<Duration>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: None,
        }
    }
}

impl TutorConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Set the base URL. A trailing `/` is removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the bearer key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the transport timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Create config from `STEPTUTOR_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults; an unparsable timeout is
    /// ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(key) = non_empty_var(API_KEY_ENV) {
            config = config.with_api_key(key);
        }
        if let Some(secs) = non_empty_var(TIMEOUT_ENV) {
            match secs.parse::<u64>() {
                Ok(secs) => config = config.with_request_timeout(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(value = %secs, "Ignoring invalid {}", TIMEOUT_ENV),
            }
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }

    #[test]
    fn test_default_config() {
        let config = TutorConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = TutorConfig::new("https://tutor.example.com/")
            .with_api_key("key")
            .with_request_timeout(Duration::from_secs(60));
        assert_eq!(config.base_url, "https://tutor.example.com");
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var(BASE_URL_ENV, "https://env.example.com//");
        std::env::set_var(API_KEY_ENV, "env-key");
        std::env::set_var(TIMEOUT_ENV, "15");

        let config = TutorConfig::from_env();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_and_invalid() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "  ");
        std::env::set_var(TIMEOUT_ENV, "soon");

        let config = TutorConfig::from_env();
        assert_eq!(config, TutorConfig::default());

        clear_env();
    }
}
