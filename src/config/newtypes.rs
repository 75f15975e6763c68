//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// The default MoySklad JSON API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.moysklad.ru/api/remap/1.2";

/// A validated API base URL.
///
/// Accepts only `http` and `https` schemes with a non-empty host. Trailing
/// slashes are stripped so paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use moysklad_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.moysklad.ru/api/remap/1.2/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.moysklad.ru/api/remap/1.2");
/// assert_eq!(url.join("entity/product"), "https://api.moysklad.ru/api/remap/1.2/entity/product");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not
    /// `http`/`https` or the host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        if rest[..host_end].is_empty() || rest.starts_with(':') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Joins a relative API path onto the base URL.
    ///
    /// Absolute `http(s)://` URLs (such as `nextHref` links returned by the
    /// API) are returned unchanged.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            return path.to_string();
        }
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
