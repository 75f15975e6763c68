//! HTTP client for MoySklad API communication.
//!
//! This module provides the [`HttpClient`] type, the single dispatcher every
//! API call goes through. It injects authentication, encodes the body,
//! retries transient failures and turns error responses into [`HttpError`].

use std::collections::HashMap;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::auth::BasicAuthToken;
use crate::clients::errors::{ApiError, HttpError, UnexpectedContentTypeError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{BaseUrl, MoySkladConfig, RetryPolicy};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The status, content type and text of one received response.
struct RawResponse {
    status: u16,
    content_type: Option<String>,
    text: String,
}

/// HTTP client for making requests to the MoySklad API.
///
/// The client handles:
/// - `Authorization: Basic` and `Accept-Encoding: gzip` on every request
/// - Compact or pretty JSON body encoding
/// - Retrying connection failures, timeouts and 5xx responses
/// - Mapping 4xx/5xx responses to [`ApiError`]
///
/// Idle connections are not kept between calls, so every dispatch opens
/// its own connection.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::MoySkladConfig;
/// use moysklad_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = MoySkladConfig::builder().login("a").password("b").build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "entity/product")
///     .query_param("limit", "10")
///     .build();
///
/// let body = client.dispatch(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL all relative paths are joined onto.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Attempt count and delay.
    retry: RetryPolicy,
    /// Pretty bodies and per-attempt logging.
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &MoySkladConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}MoySklad API Rust SDK v{SDK_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers: Self::build_default_headers(config.token(), &user_agent),
            retry: *config.retry(),
            debug: config.debug(),
        })
    }

    fn build_default_headers(token: &BasicAuthToken, user_agent: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), token.header_value());
        headers.insert("Accept-Encoding".to_string(), "gzip".to_string());
        headers.insert(
            "Accept".to_string(),
            "application/json;charset=utf-8".to_string(),
        );
        headers.insert("User-Agent".to_string(), user_agent.to_string());
        headers
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for this client.
    #[must_use]
    pub const fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Sends a request and returns the decoded JSON body.
    ///
    /// Connection failures, timeouts and 5xx responses are retried up to
    /// the policy's attempt count, sleeping the policy delay in between.
    /// 4xx responses are never retried.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the API answered 4xx, or 5xx on the last attempt (`Api`)
    /// - a transport error occurred on the last attempt, or was not retryable (`Network`)
    /// - the response is not JSON and `allow_non_json` is unset (`UnexpectedContentType`)
    /// - the body could not be encoded, or the response JSON could not be parsed (`Json`)
    pub async fn dispatch(&self, request: HttpRequest) -> Result<Value, HttpError> {
        let url = self.base_url.join(&request.path);
        let body = request.encode_body(self.debug)?;

        let mut headers = self.default_headers.clone();
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let attempts = self.retry.attempts();
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let is_last = attempt >= attempts;

            if self.debug {
                tracing::debug!(
                    method = %request.http_method,
                    url = %url,
                    attempt,
                    body = body.as_deref().unwrap_or(""),
                    "MoySklad request"
                );
            }

            let response = match self.send(&request, &url, &headers, body.as_deref()).await {
                Ok(response) => response,
                Err(err) if !is_last && (err.is_connect() || err.is_timeout()) => {
                    tracing::warn!(
                        "Request {} {} failed (attempt {}/{}): {}; retrying",
                        request.http_method,
                        url,
                        attempt,
                        attempts,
                        err
                    );
                    tokio::time::sleep(self.retry.delay()).await;
                    continue;
                }
                Err(err) => return Err(HttpError::Network(err)),
            };

            if self.debug {
                tracing::debug!(
                    status = response.status,
                    body = %response.text,
                    "MoySklad response"
                );
            }

            if response.status >= 500 {
                if !is_last {
                    tracing::warn!(
                        "Request {} {} returned {} (attempt {}/{}); retrying",
                        request.http_method,
                        url,
                        response.status,
                        attempt,
                        attempts
                    );
                    tokio::time::sleep(self.retry.delay()).await;
                    continue;
                }
                let parsed = response.json_body();
                return Err(ApiError::from_server_error(response.status, parsed.as_ref(), body).into());
            }

            if response.status >= 400 {
                let parsed = response.json_body();
                return Err(ApiError::from_client_error(response.status, parsed.as_ref(), body).into());
            }

            return Self::interpret(response, request.allow_non_json);
        }
    }

    /// Sends one attempt and reads the full response text.
    async fn send(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&str>,
    ) -> Result<RawResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = res.text().await?;

        Ok(RawResponse {
            status,
            content_type,
            text,
        })
    }

    /// Interprets a 2xx/3xx response.
    fn interpret(response: RawResponse, allow_non_json: bool) -> Result<Value, HttpError> {
        if response.is_json() {
            return Ok(serde_json::from_str(&response.text)?);
        }
        if allow_non_json {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Err(UnexpectedContentTypeError {
            status: response.status,
            content_type: response.content_type.unwrap_or_default(),
            body: response.text,
        }
        .into())
    }
}

impl RawResponse {
    /// JSON content type with a non-empty body.
    fn is_json(&self) -> bool {
        let declared = self
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"));
        declared && !self.text.trim().is_empty()
    }

    /// The body parsed as JSON, if it is JSON at all.
    fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.text).ok()
    }
}
