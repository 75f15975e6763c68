//! HTTP request types for the MoySklad API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, the
//! pending request handed to [`HttpClient::dispatch`](crate::clients::HttpClient::dispatch).

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// HTTP methods supported by the MoySklad API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be sent to the MoySklad API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use moysklad_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "entity/product")
///     .query_param("limit", "100")
///     .build();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "entity/store")
///     .body(json!({"name": "Основной склад"}))
///     .build();
///
/// let delete_request = HttpRequest::builder(HttpMethod::Delete, "entity/store/1")
///     .allow_non_json(true)
///     .build();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL, or an absolute URL.
    pub path: String,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in order. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Whether a non-JSON (e.g. empty) response counts as success.
    pub allow_non_json: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Encodes the body as JSON text.
    ///
    /// Compact by default; with `pretty` the output is indented with four
    /// spaces. Non-ASCII characters are never escaped.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body cannot be serialized.
    pub fn encode_body(&self, pretty: bool) -> Result<Option<String>, serde_json::Error> {
        self.body
            .as_ref()
            .map(|body| encode_json(body, pretty))
            .transpose()
    }
}

fn encode_json(value: &serde_json::Value, pretty: bool) -> Result<String, serde_json::Error> {
    if !pretty {
        return serde_json::to_string(value);
    }
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
    allow_non_json: bool,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
            allow_non_json: false,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends query parameters.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Accepts a non-JSON response body as success.
    ///
    /// Used for endpoints that answer with an empty body, such as DELETE.
    #[must_use]
    pub const fn allow_non_json(mut self, allow: bool) -> Self {
        self.allow_non_json = allow;
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            allow_non_json: self.allow_non_json,
        }
    }
}
