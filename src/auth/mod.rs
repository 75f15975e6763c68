//! Authentication types for the MoySklad API SDK.
//!
//! MoySklad uses HTTP Basic authentication on every request. This module
//! turns the user-facing credential forms into the token placed in the
//! `Authorization` header.
//!
//! # Overview
//!
//! - [`Credential`]: a login/password pair or a pre-encoded token
//! - [`BasicAuthToken`]: the validated token, masked in debug output
//! - [`resolve_credential`]: resolves optional arguments into a token
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::auth::{resolve_credential, Credential};
//!
//! let from_pair = resolve_credential(Some("a"), Some("b"), None).unwrap();
//! let from_token = Credential::token("YTpi").resolve().unwrap();
//! assert_eq!(from_pair, from_token);
//! ```

mod credential;

pub use credential::{resolve_credential, BasicAuthToken, Credential};
