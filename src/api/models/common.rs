//! Shared value types used across entities.

use serde::{Deserialize, Serialize};

use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta};

/// A price type configured in the account (e.g. "Цена продажи").
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceType {
    /// Meta of the price type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Price type id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// External code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

/// A sale price of a product.
///
/// `value` is in kopecks (hundredths of the currency unit).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalePrice {
    /// Price value in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Price currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,

    /// Price type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
}

/// A price without a type (buy price, minimal price).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Price {
    /// Price value in kopecks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Price currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,
}

/// A product barcode, tagged by format: `{"ean13": "4600000000000"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Barcode {
    /// EAN-13.
    Ean13(String),
    /// EAN-8.
    Ean8(String),
    /// Code 128.
    Code128(String),
    /// GTIN.
    Gtin(String),
    /// UPC.
    Upc(String),
}

/// Currency and exchange rate of a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Rate {
    /// Document currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,

    /// Exchange rate to the base currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// A document line (product, service or variant with quantity and price).
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPosition {
    /// Position meta.
    pub meta: Option<Meta>,
    /// Position id.
    pub id: Option<String>,
    /// Account id.
    pub account_id: Option<String>,
    /// Quantity of goods.
    pub quantity: Option<f64>,
    /// Unit price in kopecks.
    pub price: Option<f64>,
    /// Discount, percent.
    pub discount: Option<f64>,
    /// VAT rate, percent.
    pub vat: Option<i32>,
    /// Whether VAT applies.
    pub vat_enabled: Option<bool>,
    /// The product, service, variant or bundle.
    pub assortment: Option<EntityRef>,
    /// Reserved quantity (orders).
    pub reserve: Option<f64>,
    /// Shipped quantity (orders).
    pub shipped: Option<f64>,
    /// Quantity in transit (orders).
    pub in_transit: Option<f64>,
    /// Overhead share in kopecks (demands, supplies).
    pub overhead: Option<f64>,
}

/// A document line in a create or update body.
///
/// # Example
///
/// ```rust
/// use moysklad_api::api::{EntityRef, PositionInput};
/// use moysklad_api::BaseUrl;
///
/// let product = EntityRef::entity(&BaseUrl::default(), "product", "p-1");
/// let mut position = PositionInput::new(product, 3.0);
/// position.price = 15000.0.into();
///
/// let json = serde_json::to_value(&position).unwrap();
/// assert_eq!(json["quantity"], 3.0);
/// assert_eq!(json["price"], 15000.0);
/// assert!(json.get("discount").is_none());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionInput {
    /// The product, service, variant or bundle.
    pub assortment: EntityRef,

    /// Quantity of goods.
    pub quantity: f64,

    /// Unit price in kopecks.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub price: Field<f64>,

    /// Discount, percent.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub discount: Field<f64>,

    /// VAT rate, percent.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat: Field<i32>,

    /// Quantity to reserve (orders only).
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub reserve: Field<f64>,
}

impl PositionInput {
    /// Creates a position with the assortment and quantity.
    #[must_use]
    pub fn new(assortment: EntityRef, quantity: f64) -> Self {
        Self {
            assortment,
            quantity,
            price: Field::Unset,
            discount: Field::Unset,
            vat: Field::Unset,
            reserve: Field::Unset,
        }
    }
}
