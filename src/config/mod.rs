//! Configuration types for the MoySklad API SDK.
//!
//! This module provides the configuration used to construct a
//! [`MoySkladClient`](crate::MoySkladClient).
//!
//! # Overview
//!
//! - [`MoySkladConfig`]: The resolved configuration (credential, retry, debug)
//! - [`MoySkladConfigBuilder`]: A builder for constructing [`MoySkladConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`RetryPolicy`]: Attempt count and inter-attempt delay
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::MoySkladConfig;
//!
//! let config = MoySkladConfig::builder()
//!     .login("admin@company")
//!     .password("secret")
//!     .auto_retry_count(3)
//!     .auto_retry_delay(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retry().attempts(), 3);
//! ```

mod newtypes;
mod retry;

pub use newtypes::{BaseUrl, DEFAULT_BASE_URL};
pub use retry::{RetryPolicy, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY};

use std::time::Duration;

use crate::auth::{resolve_credential, BasicAuthToken};
use crate::error::ConfigError;

/// Default transport timeout for a single attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for the MoySklad API SDK.
///
/// The credential is resolved and validated when the configuration is
/// built, so a `MoySkladConfig` always holds a usable token.
///
/// # Thread Safety
///
/// `MoySkladConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MoySkladConfig {
    token: BasicAuthToken,
    base_url: BaseUrl,
    retry: RetryPolicy,
    debug: bool,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl MoySkladConfig {
    /// Creates a new builder for constructing a `MoySkladConfig`.
    #[must_use]
    pub fn builder() -> MoySkladConfigBuilder {
        MoySkladConfigBuilder::new()
    }

    /// Returns the resolved Basic-Auth token.
    #[must_use]
    pub const fn token(&self) -> &BasicAuthToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Returns whether debug logging and pretty-printed bodies are enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the transport timeout for a single attempt.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MoySkladConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySkladConfig>();
};

/// Builder for constructing [`MoySkladConfig`] instances.
///
/// Either `login` + `password` or `api_token` is required. All other
/// fields have defaults.
///
/// # Defaults
///
/// - `debug`: `false`
/// - `auto_retry_count`: 5
/// - `auto_retry_delay`: 1.0 seconds
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: 300 seconds
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use moysklad_api::MoySkladConfig;
///
/// let config = MoySkladConfig::builder()
///     .api_token("YTpi")
///     .debug(true)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert!(config.debug());
/// ```
#[derive(Debug, Default)]
pub struct MoySkladConfigBuilder {
    login: Option<String>,
    password: Option<String>,
    api_token: Option<String>,
    base_url: Option<String>,
    auto_retry_count: Option<u32>,
    auto_retry_delay: Option<f64>,
    debug: Option<bool>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MoySkladConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account login.
    #[must_use]
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the account password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets a pre-encoded `base64(login:password)` token.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the maximum number of attempts per request.
    #[must_use]
    pub const fn auto_retry_count(mut self, count: u32) -> Self {
        self.auto_retry_count = Some(count);
        self
    }

    /// Sets the delay between attempts, in seconds.
    #[must_use]
    pub const fn auto_retry_delay(mut self, delay_secs: f64) -> Self {
        self.auto_retry_delay = Some(delay_secs);
        self
    }

    /// Enables debug logging of every attempt and pretty-printed bodies.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets the transport timeout for a single attempt.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MoySkladConfig`], resolving the credential.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingCredentials`], [`ConfigError::AmbiguousCredentials`]
    ///   or [`ConfigError::InvalidToken`] for credential problems
    /// - [`ConfigError::InvalidRetryDelay`] for a negative or non-finite delay
    /// - [`ConfigError::InvalidBaseUrl`] for a malformed base URL
    pub fn build(self) -> Result<MoySkladConfig, ConfigError> {
        let token = resolve_credential(
            self.login.as_deref(),
            self.password.as_deref(),
            self.api_token.as_deref(),
        )?;

        let retry = RetryPolicy::new(
            self.auto_retry_count.unwrap_or(DEFAULT_RETRY_COUNT),
            self.auto_retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
        )?;

        let base_url = self
            .base_url
            .map(BaseUrl::new)
            .transpose()?
            .unwrap_or_default();

        Ok(MoySkladConfig {
            token,
            base_url,
            retry,
            debug: self.debug.unwrap_or(false),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_credentials() {
        let result = MoySkladConfigBuilder::new().build();
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = MoySkladConfig::builder()
            .login("a")
            .password("b")
            .build()
            .unwrap();

        assert_eq!(config.token().as_ref(), "YTpi");
        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.retry(), &RetryPolicy::default());
        assert!(!config.debug());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = MoySkladConfig::builder()
            .api_token("YTpi")
            .base_url("http://localhost:9000/api/remap/1.2/")
            .auto_retry_count(2)
            .auto_retry_delay(0.25)
            .debug(true)
            .timeout(Duration::from_secs(10))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000/api/remap/1.2");
        assert_eq!(config.retry().attempts(), 2);
        assert_eq!(config.retry().delay(), Duration::from_millis(250));
        assert!(config.debug());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_negative_delay() {
        let result = MoySkladConfig::builder()
            .api_token("YTpi")
            .auto_retry_delay(-1.0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidRetryDelay { .. })));
    }

    #[test]
    fn test_builder_rejects_delay_too_large_for_duration() {
        let result = MoySkladConfig::builder()
            .api_token("YTpi")
            .auto_retry_delay(1e30)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidRetryDelay { .. })));
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = MoySkladConfig::builder()
            .api_token("YTpi")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = MoySkladConfig::builder()
            .login("a")
            .password("secret")
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("MoySkladConfig"));
        assert!(!debug.contains("YTpzZWNyZXQ="));
    }
}
