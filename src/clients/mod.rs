//! HTTP dispatch layer for MoySklad API communication.
//!
//! This module provides the single HTTP call path used by every API
//! operation. It handles authentication headers, JSON body encoding,
//! gzip negotiation, retries and error mapping.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async dispatcher
//! - [`HttpRequest`]: A pending request (method, path, body, query, headers)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`], [`ApiError`], [`UnexpectedContentTypeError`]: Dispatch errors
//!
//! # Retry Behavior
//!
//! - **Connection errors and timeouts**: retried; the last one is returned unwrapped
//! - **5xx**: retried with a fixed delay; the last one becomes [`ApiError`]
//! - **4xx**: returned immediately as [`ApiError`] built from `errors[0]`
//!
//! The default is 5 attempts one second apart; see
//! [`MoySkladConfigBuilder`](crate::MoySkladConfigBuilder).

mod errors;
mod http_client;
mod http_request;

pub use errors::{ApiError, HttpError, UnexpectedContentTypeError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
