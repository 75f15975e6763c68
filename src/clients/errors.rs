//! HTTP-specific error types for the MoySklad API SDK.
//!
//! # Error Handling
//!
//! Every dispatch ends in exactly one of: a decoded JSON body, or one of
//! these errors.
//!
//! - [`ApiError`]: a 4xx response, or a 5xx response once retries are exhausted
//! - [`UnexpectedContentTypeError`]: a non-JSON response the caller did not allow
//! - [`HttpError`]: unified error type, also carrying transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::clients::HttpError;
//!
//! match client.dispatch(request).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e.message()),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::UnexpectedContentType(e)) => println!("{e}"),
//!     Err(HttpError::Json(e)) => println!("Bad JSON: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned for a 4xx response, or a 5xx response after the last attempt.
///
/// `error` holds the server's structured descriptor. For 4xx this is the first
/// element of the response's `errors` array; for 5xx it is the whole `errors`
/// value. When the server sent neither, it is `{"error": "Server returned <status>"}`.
///
/// # Example
///
/// ```rust
/// use moysklad_api::clients::ApiError;
/// use serde_json::json;
///
/// let error = ApiError {
///     status: 412,
///     error: json!({"error": "Поле 'name' не может быть пустым", "code": 3000}),
///     request_body: Some(r#"{"name":""}"#.to_string()),
/// };
///
/// assert_eq!(error.code(), Some(3000));
/// assert!(error.to_string().contains("412"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("MoySklad API error (HTTP {status}): {}", self.message())]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The server's error descriptor (object, or array of objects on 5xx).
    pub error: Value,
    /// The encoded request body that triggered the error.
    pub request_body: Option<String>,
}

impl ApiError {
    /// Builds the error for a terminal 4xx response.
    #[must_use]
    pub fn from_client_error(status: u16, body: Option<&Value>, request_body: Option<String>) -> Self {
        let error = body
            .and_then(|b| b.get("errors"))
            .and_then(|errors| errors.get(0))
            .cloned()
            .unwrap_or_else(|| Self::synthetic(status));
        Self {
            status,
            error,
            request_body,
        }
    }

    /// Builds the error for a 5xx response after the last attempt.
    #[must_use]
    pub fn from_server_error(status: u16, body: Option<&Value>, request_body: Option<String>) -> Self {
        let error = body
            .and_then(|b| b.get("errors"))
            .cloned()
            .unwrap_or_else(|| Self::synthetic(status));
        Self {
            status,
            error,
            request_body,
        }
    }

    fn synthetic(status: u16) -> Value {
        serde_json::json!({ "error": format!("Server returned {status}") })
    }

    /// The first descriptor: the object itself, or the first array element.
    fn descriptor(&self) -> Option<&Value> {
        match &self.error {
            Value::Array(items) => items.first(),
            other => Some(other),
        }
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.descriptor()
            .and_then(|d| d.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
    }

    /// Returns the MoySklad error code, if present.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.descriptor()
            .and_then(|d| d.get("code"))
            .and_then(Value::as_i64)
    }

    /// Returns the documentation link for this error, if present.
    #[must_use]
    pub fn more_info(&self) -> Option<&str> {
        self.descriptor()
            .and_then(|d| d.get("moreInfo"))
            .and_then(Value::as_str)
    }

    /// Returns the request parameter the error refers to, if present.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.descriptor()
            .and_then(|d| d.get("parameter"))
            .and_then(Value::as_str)
    }
}

/// Error returned when a response is not JSON and the request did not
/// declare tolerance for that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unexpected content type '{content_type}' (HTTP {status}): {body}")]
pub struct UnexpectedContentTypeError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The declared content type, empty if the header was missing.
    pub content_type: String,
    /// The raw response text.
    pub body: String,
}

/// Unified error type for all dispatch errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Connection failure, timeout or other transport error.
    ///
    /// This is the `reqwest` error from the last attempt, unwrapped.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response was not JSON.
    #[error(transparent)]
    UnexpectedContentType(#[from] UnexpectedContentTypeError),

    /// The request body could not be encoded, or a JSON response could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the [`ApiError`] if this is an API error.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_error_uses_first_descriptor() {
        let body = json!({
            "errors": [
                {"error": "Ошибка аутентификации", "code": 1056, "moreInfo": "https://dev.moysklad.ru/doc/api/remap/1.2/#error_1056"},
                {"error": "second", "code": 2}
            ]
        });
        let error = ApiError::from_client_error(401, Some(&body), None);

        assert_eq!(error.status, 401);
        assert_eq!(error.message(), "Ошибка аутентификации");
        assert_eq!(error.code(), Some(1056));
        assert!(error.more_info().unwrap().contains("error_1056"));
    }

    #[test]
    fn test_client_error_without_errors_array_is_synthetic() {
        let error = ApiError::from_client_error(404, None, None);
        assert_eq!(error.error, json!({"error": "Server returned 404"}));
        assert_eq!(error.message(), "Server returned 404");
    }

    #[test]
    fn test_server_error_keeps_whole_errors_value() {
        let body = json!({"errors": {"error": "Internal", "code": 1000}});
        let error = ApiError::from_server_error(500, Some(&body), Some("{}".to_string()));

        assert_eq!(error.error, json!({"error": "Internal", "code": 1000}));
        assert_eq!(error.request_body.as_deref(), Some("{}"));
        assert_eq!(error.code(), Some(1000));
    }

    #[test]
    fn test_server_error_array_payload_reads_first_message() {
        let body = json!({"errors": [{"error": "Сервис недоступен", "parameter": "x"}]});
        let error = ApiError::from_server_error(503, Some(&body), None);
        assert_eq!(error.message(), "Сервис недоступен");
        assert_eq!(error.parameter(), Some("x"));
    }

    #[test]
    fn test_server_error_without_payload_is_synthetic() {
        let error = ApiError::from_server_error(503, Some(&json!({"unexpected": true})), None);
        assert_eq!(error.error, json!({"error": "Server returned 503"}));
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let error = ApiError::from_client_error(
            412,
            Some(&json!({"errors": [{"error": "bad field"}]})),
            None,
        );
        assert_eq!(error.to_string(), "MoySklad API error (HTTP 412): bad field");
    }

    #[test]
    fn test_unexpected_content_type_message() {
        let error = UnexpectedContentTypeError {
            status: 200,
            content_type: "text/html".to_string(),
            body: "<html></html>".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("text/html"));
        assert!(message.contains("<html></html>"));
    }

    #[test]
    fn test_http_error_as_api_error() {
        let error: HttpError = ApiError::from_client_error(400, None, None).into();
        assert_eq!(error.as_api_error().map(|e| e.status), Some(400));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api: &dyn std::error::Error = &ApiError::from_client_error(400, None, None);
        let _ = api;
        let content: &dyn std::error::Error = &UnexpectedContentTypeError {
            status: 200,
            content_type: String::new(),
            body: String::new(),
        };
        let _ = content;
    }
}
