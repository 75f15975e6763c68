//! Store (warehouse) entity.
//!
//! Stores are referenced by documents that move stock and by the stock
//! reports. Stores may nest through `parent`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta, Moment};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A warehouse.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Store meta.
    pub meta: Option<Meta>,
    /// Store id.
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
    /// Store name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Code.
    pub code: Option<String>,
    /// External code.
    pub external_code: Option<String>,
    /// Whether the store is archived.
    pub archived: Option<bool>,
    /// Address as one line.
    pub address: Option<String>,
    /// Structured address.
    pub address_full: Option<Value>,
    /// Parent store.
    pub parent: Option<EntityRef>,
    /// Path of the parent stores.
    pub path_name: Option<String>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for Store {
    const NAME: &'static str = "Store";
    const TYPE: &'static str = "store";
    const PATH: &'static str = "entity/store";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/store`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStore {
    /// Store name.
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

    /// Address as one line.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub address: Field<String>,

    /// Parent store.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub parent: Field<EntityRef>,

    /// Additional fields.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateStore {
    /// Creates a body with only the name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Field::Unset,
            code: Field::Unset,
            external_code: Field::Unset,
            address: Field::Unset,
            parent: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateStore {
    type Entity = Store;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Store::PATH.to_string()
    }
}

/// Body of `PUT entity/store/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStore {
    /// Store id (path only).
    #[serde(skip)]
    pub id: String,

    /// Store name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    /// Description.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    /// Code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,

    /// External code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,

    /// Address as one line.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub address: Field<String>,

    /// Parent store.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub parent: Field<EntityRef>,

    /// Whether the store is archived.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,

    /// Additional fields.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateStore {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateStore {
    type Entity = Store;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Store::item_path(&self.id)
    }
}
