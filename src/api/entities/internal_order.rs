//! Internal order (request to restock a store from other stores).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// An internal order. Fulfilled by moves and purchase orders.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternalOrder {
    pub meta: Option<Meta>,
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub owner: Option<EntityRef>,
    pub shared: Option<bool>,
    pub group: Option<EntityRef>,
    pub updated: Option<Moment>,
    pub created: Option<Moment>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_code: Option<String>,
    pub moment: Option<Moment>,
    pub applicable: Option<bool>,
    pub rate: Option<Rate>,
    pub sum: Option<f64>,
    pub organization: Option<EntityRef>,
    /// Store to restock.
    pub store: Option<EntityRef>,
    pub state: Option<EntityRef>,
    pub delivery_planned_moment: Option<Moment>,
    pub vat_enabled: Option<bool>,
    pub vat_included: Option<bool>,
    pub vat_sum: Option<f64>,
    /// Moves created from this order.
    pub moves: Option<Vec<EntityRef>>,
    /// Purchase orders created from this order.
    pub purchase_orders: Option<Vec<EntityRef>>,
    pub positions: Option<ListResponse<DocumentPosition>>,
    pub attributes: Option<Vec<Value>>,
}

impl Entity for InternalOrder {
    const NAME: &'static str = "InternalOrder";
    const TYPE: &'static str = "internalorder";
    const PATH: &'static str = "entity/internalorder";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for InternalOrder {}

/// Body of `POST entity/internalorder`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternalOrder {
    pub organization: EntityRef,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub store: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub moment: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub applicable: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate: Field<Rate>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub state: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub delivery_planned_moment: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateInternalOrder {
    #[must_use]
    pub fn new(organization: EntityRef) -> Self {
        Self {
            organization,
            store: Field::Unset,
            name: Field::Unset,
            description: Field::Unset,
            external_code: Field::Unset,
            moment: Field::Unset,
            applicable: Field::Unset,
            rate: Field::Unset,
            state: Field::Unset,
            delivery_planned_moment: Field::Unset,
            vat_enabled: Field::Unset,
            vat_included: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateInternalOrder {
    type Entity = InternalOrder;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        InternalOrder::PATH.to_string()
    }
}

/// Body of `PUT entity/internalorder/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternalOrder {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub organization: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub store: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub moment: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub applicable: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate: Field<Rate>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub state: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub delivery_planned_moment: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateInternalOrder {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateInternalOrder {
    type Entity = InternalOrder;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        InternalOrder::item_path(&self.id)
    }
}
