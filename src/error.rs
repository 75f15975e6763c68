//! Error types for the MoySklad API SDK.
//!
//! This module contains error types raised while configuring the SDK,
//! before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::{resolve_credential, ConfigError};
//!
//! let result = resolve_credential(None, None, None);
//! assert!(matches!(result, Err(ConfigError::MissingCredentials)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// None of these are retryable: they surface immediately from the builder
/// or the client constructor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Neither a login/password pair nor an API token was provided.
    #[error("Missing credentials. Provide either a login and password or an API token.")]
    MissingCredentials,

    /// Both a login/password pair and an API token were provided.
    #[error("Ambiguous credentials. Provide either a login and password or an API token, not both.")]
    AmbiguousCredentials,

    /// The API token is not a valid basic-auth token.
    #[error("Invalid API token: {reason}. Expected base64 of 'login:password'.")]
    InvalidToken {
        /// Why the token was rejected.
        reason: String,
    },

    /// The retry delay is negative or not a finite number.
    #[error("Invalid retry delay {delay}. The delay must be a finite number of seconds >= 0.")]
    InvalidRetryDelay {
        /// The rejected delay, in seconds.
        delay: f64,
    },

    /// The base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.moysklad.ru/api/remap/1.2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// The error reported by the HTTP library.
        reason: String,
    },
}
