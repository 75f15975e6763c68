//! Product entity.
//!
//! Products are the main catalog items. They carry sale prices, a buy
//! price, barcodes and an optional product folder.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::api::entities::{CreateProduct, UpdateProduct};
//! use moysklad_api::api::{Barcode, Field, ListParams};
//!
//! let mut request = CreateProduct::new("Чай зелёный");
//! request.article = "TEA-01".to_string().into();
//! request.barcodes = vec![Barcode::Ean13("4600000000001".to_string())].into();
//! let product = client.create_product(&request).await?;
//!
//! let mut update = UpdateProduct::new(product.id.unwrap());
//! update.description = Field::Null;
//! client.update_product(&update).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{Barcode, EntityRef, Meta, Moment, Price, SalePrice};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A product in the catalog.
///
/// Prices are in kopecks. `attributes` holds account-specific additional
/// fields as raw JSON.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product meta.
    pub meta: Option<Meta>,
    /// Product id.
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
    /// Product name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Code.
    pub code: Option<String>,
    /// External code.
    pub external_code: Option<String>,
    /// Whether the product is archived.
    pub archived: Option<bool>,
    /// Folder path, e.g. "Напитки/Чай".
    pub path_name: Option<String>,
    /// Containing folder.
    pub product_folder: Option<EntityRef>,
    /// Article.
    pub article: Option<String>,
    /// Unit of measure.
    pub uom: Option<EntityRef>,
    /// Sale prices.
    pub sale_prices: Option<Vec<SalePrice>>,
    /// Buy price.
    pub buy_price: Option<Price>,
    /// Minimal price.
    pub min_price: Option<Price>,
    /// Barcodes.
    pub barcodes: Option<Vec<Barcode>>,
    /// VAT rate, percent.
    pub vat: Option<i32>,
    /// Whether VAT applies.
    pub vat_enabled: Option<bool>,
    /// Weight.
    pub weight: Option<f64>,
    /// Volume.
    pub volume: Option<f64>,
    /// Minimum stock balance.
    pub minimum_balance: Option<f64>,
    /// Number of variants.
    pub variants_count: Option<i64>,
    /// Whether the product is weighed.
    pub weighed: Option<bool>,
    /// Payment item type, e.g. "GOOD".
    pub payment_item_type: Option<String>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for Product {
    const NAME: &'static str = "Product";
    const TYPE: &'static str = "product";
    const PATH: &'static str = "entity/product";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/product`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Product name.
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

    /// Article.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub article: Field<String>,

    /// Containing folder.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_folder: Field<EntityRef>,

    /// Unit of measure.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub uom: Field<EntityRef>,

    /// Sale prices.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub sale_prices: Field<Vec<SalePrice>>,

    /// Buy price.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub buy_price: Field<Price>,

    /// Minimal price.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub min_price: Field<Price>,

    /// Barcodes.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub barcodes: Field<Vec<Barcode>>,

    /// VAT rate, percent.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat: Field<i32>,

    /// Whether VAT applies.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,

    /// Weight.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub weight: Field<f64>,

    /// Volume.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub volume: Field<f64>,

    /// Whether the product is archived.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,

    /// Additional fields.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateProduct {
    /// Creates a body with only the name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Field::Unset,
            code: Field::Unset,
            external_code: Field::Unset,
            article: Field::Unset,
            product_folder: Field::Unset,
            uom: Field::Unset,
            sale_prices: Field::Unset,
            buy_price: Field::Unset,
            min_price: Field::Unset,
            barcodes: Field::Unset,
            vat: Field::Unset,
            vat_enabled: Field::Unset,
            weight: Field::Unset,
            volume: Field::Unset,
            archived: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateProduct {
    type Entity = Product;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Product::PATH.to_string()
    }
}

/// Body of `PUT entity/product/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    /// Product id (path only).
    #[serde(skip)]
    pub id: String,

    /// Product name.
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

    /// Article.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub article: Field<String>,

    /// Containing folder.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_folder: Field<EntityRef>,

    /// Unit of measure.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub uom: Field<EntityRef>,

    /// Sale prices.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub sale_prices: Field<Vec<SalePrice>>,

    /// Buy price.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub buy_price: Field<Price>,

    /// Minimal price.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub min_price: Field<Price>,

    /// Barcodes.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub barcodes: Field<Vec<Barcode>>,

    /// VAT rate, percent.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat: Field<i32>,

    /// Whether VAT applies.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,

    /// Weight.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub weight: Field<f64>,

    /// Volume.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub volume: Field<f64>,

    /// Whether the product is archived.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,

    /// Additional fields.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateProduct {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateProduct {
    type Entity = Product;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Product::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ApiRequest;
    use crate::config::BaseUrl;
    use serde_json::json;

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/product/19f1edc0-fc42-4001-94cb-c9ec9c62ec10",
                "type": "product",
                "mediaType": "application/json"
            },
            "id": "19f1edc0-fc42-4001-94cb-c9ec9c62ec10",
            "name": "Чай зелёный",
            "updated": "2024-03-01 12:30:45.123",
            "archived": false,
            "pathName": "Напитки/Чай",
            "salePrices": [{"value": 25000.0, "priceType": {"name": "Цена продажи"}}],
            "barcodes": [{"ean13": "4600000000001"}],
            "vat": 20,
            "unknownField": {"ignored": true}
        }))
        .unwrap();

        assert_eq!(product.id.as_deref(), Some("19f1edc0-fc42-4001-94cb-c9ec9c62ec10"));
        assert_eq!(product.name.as_deref(), Some("Чай зелёный"));
        assert_eq!(product.updated.unwrap().to_string(), "2024-03-01 12:30:45.123");
        assert_eq!(product.sale_prices.unwrap()[0].value, Some(25000.0));
        assert_eq!(
            product.barcodes.unwrap(),
            vec![Barcode::Ean13("4600000000001".to_string())]
        );
        assert_eq!(product.vat, Some(20));
        assert!(product.buy_price.is_none());
    }

    #[test]
    fn test_create_product_sends_only_set_fields() {
        let mut request = CreateProduct::new("Чай");
        request.article = "TEA-01".to_string().into();
        request.product_folder =
            EntityRef::entity(&BaseUrl::default(), "productfolder", "f-1").into();

        let pending = request.to_request().unwrap();
        assert_eq!(pending.http_method, HttpMethod::Post);
        assert_eq!(pending.path, "entity/product");
        assert_eq!(
            pending.body.unwrap(),
            json!({
                "name": "Чай",
                "article": "TEA-01",
                "productFolder": {
                    "meta": {
                        "href": "https://api.moysklad.ru/api/remap/1.2/entity/productfolder/f-1",
                        "type": "productfolder",
                        "mediaType": "application/json"
                    }
                }
            })
        );
    }

    #[test]
    fn test_update_product_path_and_null_fields() {
        let mut request = UpdateProduct::new("p-1");
        request.description = Field::Null;
        request.archived = true.into();

        let pending = request.to_request().unwrap();
        assert_eq!(pending.http_method, HttpMethod::Put);
        assert_eq!(pending.path, "entity/product/p-1");
        assert_eq!(pending.body.unwrap(), json!({"description": null, "archived": true}));
    }
}
