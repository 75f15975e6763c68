//! Optional request body fields that distinguish "omit" from "clear".
//!
//! MoySklad treats a missing field as "leave unchanged" and a `null` field
//! as "clear the value". `Option<T>` cannot express both, so request bodies
//! use [`Field<T>`] together with
//! `#[serde(skip_serializing_if = "Field::is_unset")]`.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::Field;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Default)]
//! struct Body {
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     name: Field<String>,
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     description: Field<String>,
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     code: Field<String>,
//! }
//!
//! let body = Body {
//!     name: "Товар".to_string().into(),
//!     description: Field::Null,
//!     ..Default::default()
//! };
//! assert_eq!(
//!     serde_json::to_string(&body).unwrap(),
//!     r#"{"name":"Товар","description":null}"#
//! );
//! ```

use serde::{Serialize, Serializer};

/// A request body field that is either unset, explicitly null, or a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field<T> {
    /// Not sent at all.
    Unset,
    /// Sent as JSON `null`.
    Null,
    /// Sent as the value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field will be omitted from the body.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field will be sent as `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if any.
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts an `Option`, mapping `None` to [`Field::Null`].
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Null | Self::Unset => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Body {
        #[serde(skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
        #[serde(skip_serializing_if = "Field::is_unset")]
        archived: Field<bool>,
    }

    #[test]
    fn test_default_is_unset() {
        let field: Field<u32> = Field::default();
        assert!(field.is_unset());
        assert!(!field.is_null());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let body = Body::default();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({}));
    }

    #[test]
    fn test_null_fields_are_sent_as_null() {
        let body = Body {
            name: Field::Null,
            archived: true.into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": null, "archived": true})
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::from_option(Some(1)), Field::Value(1));
        assert_eq!(Field::<i32>::from_option(None), Field::Null);
    }

    #[test]
    fn test_as_value() {
        assert_eq!(Field::Value("x").as_value(), Some(&"x"));
        assert_eq!(Field::<&str>::Null.as_value(), None);
    }
}
