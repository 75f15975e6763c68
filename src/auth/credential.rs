//! Basic-Auth credential resolution.
//!
//! MoySklad authenticates every request with `Authorization: Basic <token>`,
//! where the token is the base64 encoding of `login:password`. Callers may
//! supply either the login/password pair or an already encoded token; both
//! are validated and normalized into a [`BasicAuthToken`] here.

use std::fmt;

use base64::prelude::*;

use crate::error::ConfigError;

/// The credential a client authenticates with.
///
/// # Example
///
/// ```rust
/// use moysklad_api::Credential;
///
/// let credential = Credential::login_password("admin@shop", "secret");
/// let token = credential.resolve().unwrap();
/// assert_eq!(token.decode().unwrap(), "admin@shop:secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// A login and password pair.
    LoginPassword {
        /// The account login (e.g. `admin@company`).
        login: String,
        /// The account password.
        password: String,
    },
    /// A pre-encoded `base64(login:password)` token.
    Token(String),
}

impl Credential {
    /// Creates a login/password credential.
    #[must_use]
    pub fn login_password(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::LoginPassword {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Creates a token credential.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Validates the credential and produces the Basic-Auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if the login or password
    /// is empty, and [`ConfigError::InvalidToken`] if a token does not decode
    /// to `login:password`.
    pub fn resolve(&self) -> Result<BasicAuthToken, ConfigError> {
        match self {
            Self::LoginPassword { login, password } => {
                if login.is_empty() || password.is_empty() {
                    return Err(ConfigError::MissingCredentials);
                }
                Ok(BasicAuthToken(
                    BASE64_STANDARD.encode(format!("{login}:{password}")),
                ))
            }
            Self::Token(token) => {
                if token.is_empty() {
                    return Err(ConfigError::MissingCredentials);
                }
                validate_token(token)?;
                Ok(BasicAuthToken(token.clone()))
            }
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginPassword { login, .. } => f
                .debug_struct("LoginPassword")
                .field("login", login)
                .field("password", &"*****")
                .finish(),
            Self::Token(_) => f.write_str("Token(*****)"),
        }
    }
}

/// A validated Basic-Auth token.
///
/// The `Debug` implementation masks the value, displaying only
/// `BasicAuthToken(*****)`.
///
/// # Example
///
/// ```rust
/// use moysklad_api::resolve_credential;
///
/// let token = resolve_credential(Some("a"), Some("b"), None).unwrap();
/// assert_eq!(token.as_ref(), "YTpi");
/// assert_eq!(format!("{:?}", token), "BasicAuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuthToken(String);

impl BasicAuthToken {
    /// Returns the value for the `Authorization` header (`Basic <token>`).
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }

    /// Decodes the token back into its `login:password` text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if the token cannot be decoded,
    /// which cannot happen for tokens produced by this module.
    pub fn decode(&self) -> Result<String, ConfigError> {
        validate_token(&self.0)
    }
}

impl AsRef<str> for BasicAuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BasicAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuthToken(*****)")
    }
}

/// Resolves optional login, password and token arguments into a token.
///
/// Empty strings count as absent. Exactly one form must be supplied: a
/// complete login/password pair, or a token.
///
/// # Errors
///
/// - [`ConfigError::MissingCredentials`] if neither form is complete
/// - [`ConfigError::AmbiguousCredentials`] if both forms are supplied
/// - [`ConfigError::InvalidToken`] if the token is not base64 of `login:password`
///
/// # Example
///
/// ```rust
/// use moysklad_api::{resolve_credential, ConfigError};
///
/// let token = resolve_credential(None, None, Some("YTpi")).unwrap();
/// assert_eq!(token.decode().unwrap(), "a:b");
///
/// let result = resolve_credential(None, None, Some("bm8tY29sb24="));
/// assert!(matches!(result, Err(ConfigError::InvalidToken { .. })));
/// ```
pub fn resolve_credential(
    login: Option<&str>,
    password: Option<&str>,
    token: Option<&str>,
) -> Result<BasicAuthToken, ConfigError> {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    let pair = match (non_empty(login), non_empty(password)) {
        (Some(login), Some(password)) => Some(Credential::login_password(login, password)),
        _ => None,
    };
    let token = non_empty(token).map(Credential::token);

    match (pair, token) {
        (Some(_), Some(_)) => Err(ConfigError::AmbiguousCredentials),
        (Some(credential), None) | (None, Some(credential)) => credential.resolve(),
        (None, None) => Err(ConfigError::MissingCredentials),
    }
}

fn validate_token(token: &str) -> Result<String, ConfigError> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(|e| ConfigError::InvalidToken {
            reason: format!("not valid base64 ({e})"),
        })?;
    let decoded = String::from_utf8(bytes).map_err(|_| ConfigError::InvalidToken {
        reason: "decoded value is not UTF-8".to_string(),
    })?;
    if !decoded.contains(':') {
        return Err(ConfigError::InvalidToken {
            reason: "decoded value has no ':' separator".to_string(),
        });
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_password_encodes_basic_token() {
        let token = resolve_credential(Some("a"), Some("b"), None).unwrap();
        assert_eq!(token.as_ref(), BASE64_STANDARD.encode("a:b"));
        assert_eq!(token.header_value(), "Basic YTpi");
    }

    #[test]
    fn test_login_password_round_trips_through_decode() {
        let pairs = [
            ("admin@company", "p@ss:word"),
            ("кладовщик@склад", "пароль"),
            ("user", " spaced "),
        ];
        for (login, password) in pairs {
            let token = resolve_credential(Some(login), Some(password), None).unwrap();
            assert_eq!(token.decode().unwrap(), format!("{login}:{password}"));
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve_credential(Some("login"), Some("pass"), None).unwrap();
        let second = resolve_credential(Some("login"), Some("pass"), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_valid_token_is_accepted_as_is() {
        let encoded = BASE64_STANDARD.encode("admin@shop:secret");
        let token = resolve_credential(None, None, Some(&encoded)).unwrap();
        assert_eq!(token.as_ref(), encoded);
    }

    #[test]
    fn test_token_that_is_not_base64_is_rejected() {
        let result = resolve_credential(None, None, Some("not base64!!"));
        assert!(matches!(result, Err(ConfigError::InvalidToken { .. })));
    }

    #[test]
    fn test_token_without_separator_is_rejected() {
        let encoded = BASE64_STANDARD.encode("no-colon-here");
        let result = resolve_credential(None, None, Some(&encoded));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidToken { reason }) if reason.contains("':'")
        ));
    }

    #[test]
    fn test_token_with_non_utf8_payload_is_rejected() {
        let encoded = BASE64_STANDARD.encode([0xff, 0xfe, b':', 0x80]);
        let result = resolve_credential(None, None, Some(&encoded));
        assert!(matches!(result, Err(ConfigError::InvalidToken { .. })));
    }

    #[test]
    fn test_missing_everything_is_rejected() {
        assert_eq!(
            resolve_credential(None, None, None),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_incomplete_pair_is_rejected() {
        assert_eq!(
            resolve_credential(Some("login"), None, None),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            resolve_credential(Some("login"), Some(""), None),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let encoded = BASE64_STANDARD.encode("a:b");
        let token = resolve_credential(Some(""), Some(""), Some(&encoded)).unwrap();
        assert_eq!(token.decode().unwrap(), "a:b");
        assert_eq!(
            resolve_credential(Some("a"), Some("b"), Some("")).unwrap().decode().unwrap(),
            "a:b"
        );
    }

    #[test]
    fn test_incomplete_pair_with_token_uses_token() {
        let encoded = BASE64_STANDARD.encode("a:b");
        let token = resolve_credential(Some("login"), None, Some(&encoded)).unwrap();
        assert_eq!(token.decode().unwrap(), "a:b");
    }

    #[test]
    fn test_pair_and_token_together_are_ambiguous() {
        let encoded = BASE64_STANDARD.encode("a:b");
        assert_eq!(
            resolve_credential(Some("a"), Some("b"), Some(&encoded)),
            Err(ConfigError::AmbiguousCredentials)
        );
    }

    #[test]
    fn test_debug_output_is_masked() {
        let token = resolve_credential(Some("a"), Some("secret"), None).unwrap();
        assert_eq!(format!("{token:?}"), "BasicAuthToken(*****)");

        let credential = Credential::login_password("a", "secret");
        let debug = format!("{credential:?}");
        assert!(debug.contains("\"a\""));
        assert!(!debug.contains("secret"));
        assert_eq!(format!("{:?}", Credential::token("x")), "Token(*****)");
    }
}
