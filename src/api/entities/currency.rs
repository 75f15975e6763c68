//! Currency entity.
//!
//! Every account has a default currency (usually RUB). Other currencies
//! either follow the Central Bank rate (`RateUpdateType::Auto`) or use a
//! rate entered by hand.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{Meta, Moment};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// How the exchange rate of a currency is maintained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RateUpdateType {
    /// Updated automatically from the Central Bank.
    Auto,
    /// Entered by hand.
    Manual,
}

/// A currency.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Currency meta.
    pub meta: Option<Meta>,
    /// Currency id.
    pub id: Option<String>,
    /// Account id.
    pub account_id: Option<String>,
    /// Last update time.
    pub updated: Option<Moment>,
    /// Short name, e.g. "руб".
    pub name: Option<String>,
    /// Full name, e.g. "Российский рубль".
    pub full_name: Option<String>,
    /// Numeric code, e.g. "643".
    pub code: Option<String>,
    /// Letter code, e.g. "RUB".
    pub iso_code: Option<String>,
    /// Rate to the default currency.
    pub rate: Option<f64>,
    /// Rate multiplier.
    pub multiplicity: Option<i64>,
    /// Whether the rate is inverted.
    pub indirect: Option<bool>,
    /// How the rate is maintained.
    pub rate_update_type: Option<RateUpdateType>,
    /// Whether this is the account's default currency.
    pub default: Option<bool>,
    /// Whether the currency is hidden.
    pub archived: Option<bool>,
    /// Whether the currency is a system one.
    pub system: Option<bool>,
    /// Unit names for amounts in words.
    pub major_unit: Option<Value>,
    /// Subunit names for amounts in words.
    pub minor_unit: Option<Value>,
}

impl Entity for Currency {
    const NAME: &'static str = "Currency";
    const TYPE: &'static str = "currency";
    const PATH: &'static str = "entity/currency";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/currency`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrency {
    /// Short name.
    pub name: String,

    /// Numeric code.
    pub code: String,

    /// Letter code.
    pub iso_code: String,

    /// Full name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub full_name: Field<String>,

    /// Rate to the default currency.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate: Field<f64>,

    /// Rate multiplier.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub multiplicity: Field<i64>,

    /// Whether the rate is inverted.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub indirect: Field<bool>,

    /// How the rate is maintained.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate_update_type: Field<RateUpdateType>,
}

impl CreateCurrency {
    /// Creates a body with the names and codes set.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, iso_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            iso_code: iso_code.into(),
            full_name: Field::Unset,
            rate: Field::Unset,
            multiplicity: Field::Unset,
            indirect: Field::Unset,
            rate_update_type: Field::Unset,
        }
    }
}

impl WriteRequest for CreateCurrency {
    type Entity = Currency;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Currency::PATH.to_string()
    }
}

/// Body of `PUT entity/currency/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrency {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub full_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub iso_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub multiplicity: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub indirect: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate_update_type: Field<RateUpdateType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,
}

impl UpdateCurrency {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateCurrency {
    type Entity = Currency;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Currency::item_path(&self.id)
    }
}
