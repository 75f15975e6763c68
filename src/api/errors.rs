//! Error type for API operations.
//!
//! [`RequestError`] wraps dispatch errors and adds the two mapping failures
//! of the entity layer: encoding a request body and decoding a response.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for typed API operations.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::api::RequestError;
/// use moysklad_api::clients::HttpError;
///
/// match client.get_product("id").await {
///     Ok(product) => println!("{:?}", product.name),
///     Err(RequestError::Http(HttpError::Api(e))) if e.status == 404 => println!("gone"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum RequestError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request body could not be encoded.
    #[error("Failed to encode {target} request: {source}")]
    Encode {
        /// What was being encoded (e.g. "Product").
        target: &'static str,
        /// The serializer error.
        source: serde_json::Error,
    },

    /// The response did not have the expected shape.
    #[error("Failed to decode {target} response: {source}")]
    Decode {
        /// What was being decoded (e.g. "Product").
        target: &'static str,
        /// The deserializer error.
        source: serde_json::Error,
    },
}

impl RequestError {
    /// Returns the HTTP status of an API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.as_api_error().map(|api| api.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;

    #[test]
    fn test_decode_error_names_target() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = RequestError::Decode {
            target: "Product",
            source,
        };
        assert!(error.to_string().starts_with("Failed to decode Product response"));
    }

    #[test]
    fn test_status_of_wrapped_api_error() {
        let error: RequestError = HttpError::from(ApiError::from_client_error(404, None, None)).into();
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let api = ApiError::from_client_error(403, None, None);
        let expected = api.to_string();
        let error: RequestError = HttpError::from(api).into();
        assert_eq!(error.to_string(), expected);
    }
}
