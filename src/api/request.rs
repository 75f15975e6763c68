//! The request/response calling convention of the entity layer.
//!
//! Every API operation is a value implementing [`ApiRequest`]: it describes
//! the HTTP request to send and knows how to parse the reply. The values do
//! not perform I/O themselves; [`MoySkladClient::execute`](crate::MoySkladClient::execute)
//! dispatches them.
//!
//! Create and update bodies implement [`WriteRequest`] instead and get
//! [`ApiRequest`] through a blanket implementation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::entity::Entity;
use crate::api::errors::RequestError;
use crate::clients::{HttpMethod, HttpRequest};

/// An API operation: a request builder paired with a response parser.
///
/// # Example
///
/// ```rust
/// use moysklad_api::api::{ApiRequest, RequestError};
/// use moysklad_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::Value;
///
/// struct CompanySettings;
///
/// impl ApiRequest for CompanySettings {
///     type Output = Value;
///
///     fn to_request(&self) -> Result<HttpRequest, RequestError> {
///         Ok(HttpRequest::builder(HttpMethod::Get, "context/companysettings").build())
///     }
///
///     fn from_response(&self, raw: Value) -> Result<Value, RequestError> {
///         Ok(raw)
///     }
/// }
/// ```
pub trait ApiRequest {
    /// The parsed response type.
    type Output;

    /// Builds the pending HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if the body cannot be serialized.
    fn to_request(&self) -> Result<HttpRequest, RequestError>;

    /// Parses the dispatcher's JSON result.
    ///
    /// Missing fields become `None`; only a mismatched shape is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] if the JSON has the wrong shape.
    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError>;
}

/// A serializable create or update body for an entity.
///
/// The body is sent as-is; fields left as [`Field::Unset`](crate::api::Field::Unset)
/// are omitted. The response is parsed as [`WriteRequest::Entity`].
pub trait WriteRequest: Serialize {
    /// The entity created or updated.
    type Entity: Entity;

    /// `Post` for create, `Put` for update.
    const METHOD: HttpMethod;

    /// Path relative to the base URL.
    fn path(&self) -> String;
}

impl<T: WriteRequest> ApiRequest for T {
    type Output = T::Entity;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let body = encode(self, T::Entity::NAME)?;
        Ok(HttpRequest::builder(T::METHOD, self.path()).body(body).build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, T::Entity::NAME)
    }
}

/// Serializes a request body.
///
/// # Errors
///
/// Returns [`RequestError::Encode`] naming `target`.
pub fn encode<T: Serialize + ?Sized>(body: &T, target: &'static str) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|source| RequestError::Encode { target, source })
}

/// Deserializes a response body.
///
/// # Errors
///
/// Returns [`RequestError::Decode`] naming `target`.
pub fn decode<T: DeserializeOwned>(raw: Value, target: &'static str) -> Result<T, RequestError> {
    serde_json::from_value(raw).map_err(|source| RequestError::Decode { target, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_reports_target() {
        let result: Result<Vec<u32>, _> = decode(json!({"not": "a list"}), "Widgets");
        assert!(matches!(
            result,
            Err(RequestError::Decode { target: "Widgets", .. })
        ));
    }

    #[test]
    fn test_encode_plain_value() {
        let value = encode(&json!({"name": "x"}), "Thing").unwrap();
        assert_eq!(value, json!({"name": "x"}));
    }
}
