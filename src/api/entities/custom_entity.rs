//! Custom entities (user-defined directories) and their elements.
//!
//! A custom entity is a directory the account defines, such as "Brands".
//! The directory itself is created under `entity/customentity` but updated
//! and deleted through the company settings metadata. Its elements live
//! under `entity/customentity/{metadata_id}`, where `metadata_id` is the
//! directory's id.
//!
//! These paths do not fit [`Entity`](crate::api::Entity), so every
//! request here implements [`ApiRequest`] directly.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::entities::{CreateCustomEntityElement, ListCustomEntityElements};
//! use moysklad_api::api::{ApiRequest, ListParams};
//!
//! let list = ListCustomEntityElements::new("dir-1", ListParams::new().search("Acme"));
//! assert_eq!(list.to_request().unwrap().path, "entity/customentity/dir-1");
//!
//! let create = CreateCustomEntityElement::new("dir-1", "Acme");
//! let pending = create.to_request().unwrap();
//! assert_eq!(pending.path, "entity/customentity/dir-1");
//! assert_eq!(pending.body.unwrap()["name"], "Acme");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::ListParams;
use crate::api::errors::RequestError;
use crate::api::field::Field;
use crate::api::models::{EntityRef, ListResponse, Meta, Moment};
use crate::api::request::{decode, encode, ApiRequest};
use crate::clients::{HttpMethod, HttpRequest};
use crate::config::BaseUrl;

const CUSTOM_ENTITY_PATH: &str = "entity/customentity";
const METADATA_PATH: &str = "entity/companysettings/metadata/customEntities";

fn element_path(metadata_id: &str, id: &str) -> String {
    format!("{CUSTOM_ENTITY_PATH}/{metadata_id}/{id}")
}

/// A custom entity (directory).
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntity {
    /// Directory meta.
    pub meta: Option<Meta>,
    /// Directory id, used as `metadata_id` for its elements.
    pub id: Option<String>,
    /// Directory name.
    pub name: Option<String>,
}

/// An element of a custom entity.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityElement {
    /// Element meta.
    pub meta: Option<Meta>,
    /// Element id.
    pub id: Option<String>,
    /// Account id.
    pub account_id: Option<String>,
    /// Owner employee.
    pub owner: Option<EntityRef>,
    /// Whether all employees can see it.
    pub shared: Option<bool>,
    /// Owner group.
    pub group: Option<EntityRef>,
    /// Last update time.
    pub updated: Option<Moment>,
    /// Element name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Code.
    pub code: Option<String>,
    /// External code.
    pub external_code: Option<String>,
}

impl CustomEntityElement {
    /// References element `id` of directory `metadata_id` under `base`.
    ///
    /// Use this to fill a custom-entity-typed additional field.
    #[must_use]
    pub fn reference(base: &BaseUrl, metadata_id: &str, id: &str) -> EntityRef {
        EntityRef::new(Meta::new(
            base.join(&element_path(metadata_id, id)),
            "customentity",
        ))
    }
}

/// `POST entity/customentity`: creates a directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateCustomEntity {
    /// Directory name.
    pub name: String,
}

impl CreateCustomEntity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ApiRequest for CreateCustomEntity {
    type Output = CustomEntity;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let body = encode(self, "CustomEntity")?;
        Ok(HttpRequest::builder(HttpMethod::Post, CUSTOM_ENTITY_PATH)
            .body(body)
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntity")
    }
}

/// `PUT entity/companysettings/metadata/customEntities/{id}`: renames a directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpdateCustomEntity {
    /// Directory id (path only).
    #[serde(skip)]
    pub id: String,
    /// New name.
    pub name: String,
}

impl UpdateCustomEntity {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl ApiRequest for UpdateCustomEntity {
    type Output = CustomEntity;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let body = encode(self, "CustomEntity")?;
        Ok(
            HttpRequest::builder(HttpMethod::Put, format!("{METADATA_PATH}/{}", self.id))
                .body(body)
                .build(),
        )
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntity")
    }
}

/// `DELETE entity/companysettings/metadata/customEntities/{id}`: removes a
/// directory with all its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCustomEntity {
    /// Directory id.
    pub id: String,
}

impl DeleteCustomEntity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ApiRequest for DeleteCustomEntity {
    type Output = ();

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(
            HttpRequest::builder(HttpMethod::Delete, format!("{METADATA_PATH}/{}", self.id))
                .allow_non_json(true)
                .build(),
        )
    }

    fn from_response(&self, _raw: Value) -> Result<Self::Output, RequestError> {
        Ok(())
    }
}

/// `GET entity/customentity/{metadata_id}`: lists elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCustomEntityElements {
    /// Directory id.
    pub metadata_id: String,
    /// Paging, search and filter parameters.
    pub params: ListParams,
}

impl ListCustomEntityElements {
    #[must_use]
    pub fn new(metadata_id: impl Into<String>, params: ListParams) -> Self {
        Self {
            metadata_id: metadata_id.into(),
            params,
        }
    }
}

impl ApiRequest for ListCustomEntityElements {
    type Output = ListResponse<CustomEntityElement>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let path = format!("{CUSTOM_ENTITY_PATH}/{}", self.metadata_id);
        Ok(HttpRequest::builder(HttpMethod::Get, path)
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntityElement")
    }
}

/// `GET entity/customentity/{metadata_id}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCustomEntityElement {
    /// Directory id.
    pub metadata_id: String,
    /// Element id.
    pub id: String,
}

impl GetCustomEntityElement {
    #[must_use]
    pub fn new(metadata_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            metadata_id: metadata_id.into(),
            id: id.into(),
        }
    }
}

impl ApiRequest for GetCustomEntityElement {
    type Output = CustomEntityElement;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, element_path(&self.metadata_id, &self.id)).build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntityElement")
    }
}

/// `POST entity/customentity/{metadata_id}`: creates an element.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomEntityElement {
    /// Directory id (path only).
    #[serde(skip)]
    pub metadata_id: String,

    /// Element name.
    pub name: String,

    /// Description.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    /// Code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,

    /// External code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
}

impl CreateCustomEntityElement {
    /// Creates a body with only the name set.
    #[must_use]
    pub fn new(metadata_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata_id: metadata_id.into(),
            name: name.into(),
            description: Field::Unset,
            code: Field::Unset,
            external_code: Field::Unset,
        }
    }
}

impl ApiRequest for CreateCustomEntityElement {
    type Output = CustomEntityElement;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let body = encode(self, "CustomEntityElement")?;
        let path = format!("{CUSTOM_ENTITY_PATH}/{}", self.metadata_id);
        Ok(HttpRequest::builder(HttpMethod::Post, path).body(body).build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntityElement")
    }
}

/// `PUT entity/customentity/{metadata_id}/{id}`: updates an element.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomEntityElement {
    /// Directory id (path only).
    #[serde(skip)]
    pub metadata_id: String,

    /// Element id (path only).
    #[serde(skip)]
    pub id: String,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,

    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
}

impl UpdateCustomEntityElement {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(metadata_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            metadata_id: metadata_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ApiRequest for UpdateCustomEntityElement {
    type Output = CustomEntityElement;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let body = encode(self, "CustomEntityElement")?;
        Ok(
            HttpRequest::builder(HttpMethod::Put, element_path(&self.metadata_id, &self.id))
                .body(body)
                .build(),
        )
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CustomEntityElement")
    }
}

/// `DELETE entity/customentity/{metadata_id}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCustomEntityElement {
    /// Directory id.
    pub metadata_id: String,
    /// Element id.
    pub id: String,
}

impl DeleteCustomEntityElement {
    #[must_use]
    pub fn new(metadata_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            metadata_id: metadata_id.into(),
            id: id.into(),
        }
    }
}

impl ApiRequest for DeleteCustomEntityElement {
    type Output = ();

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(
            HttpRequest::builder(HttpMethod::Delete, element_path(&self.metadata_id, &self.id))
                .allow_non_json(true)
                .build(),
        )
    }

    fn from_response(&self, _raw: Value) -> Result<Self::Output, RequestError> {
        Ok(())
    }
}
