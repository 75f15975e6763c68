//! Product folder entity (catalog groups).

use serde::{Deserialize, Serialize};

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta, Moment};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A product folder. Folders nest through `product_folder`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFolder {
    pub meta: Option<Meta>,
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub owner: Option<EntityRef>,
    pub shared: Option<bool>,
    pub group: Option<EntityRef>,
    pub updated: Option<Moment>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub external_code: Option<String>,
    pub archived: Option<bool>,
    /// Path of the parent folders.
    pub path_name: Option<String>,
    /// Parent folder.
    pub product_folder: Option<EntityRef>,
    pub vat: Option<i32>,
    pub vat_enabled: Option<bool>,
    pub use_parent_vat: Option<bool>,
}

impl Entity for ProductFolder {
    const NAME: &'static str = "ProductFolder";
    const TYPE: &'static str = "productfolder";
    const PATH: &'static str = "entity/productfolder";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/productfolder`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductFolder {
    pub name: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_folder: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
}

impl CreateProductFolder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Field::Unset,
            code: Field::Unset,
            external_code: Field::Unset,
            product_folder: Field::Unset,
            vat: Field::Unset,
            vat_enabled: Field::Unset,
        }
    }
}

impl WriteRequest for CreateProductFolder {
    type Entity = ProductFolder;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        ProductFolder::PATH.to_string()
    }
}

/// Body of `PUT entity/productfolder/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductFolder {
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
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_folder: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,
}

impl UpdateProductFolder {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateProductFolder {
    type Entity = ProductFolder;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        ProductFolder::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ApiRequest;
    use serde_json::json;

    #[test]
    fn test_move_folder_to_root_sends_null_parent() {
        let mut request = UpdateProductFolder::new("f-2");
        request.product_folder = Field::Null;

        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/productfolder/f-2");
        assert_eq!(pending.body.unwrap(), json!({"productFolder": null}));
    }

    #[test]
    fn test_folder_parent_reference() {
        let folder: ProductFolder = serde_json::from_value(json!({
            "name": "Чай",
            "pathName": "Напитки",
            "productFolder": {"meta": {"href": "https://x/entity/productfolder/f-1", "type": "productfolder"}}
        }))
        .unwrap();
        assert_eq!(folder.product_folder.unwrap().id(), Some("f-1"));
    }
}
