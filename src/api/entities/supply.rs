//! Supply (goods receipt) document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A receipt of goods from a supplier into a store.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    /// Document meta.
    pub meta: Option<Meta>,
    /// Document id.
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
    /// Creation time.
    pub created: Option<Moment>,
    /// Document number.
    pub name: Option<String>,
    /// Comment.
    pub description: Option<String>,
    /// External code.
    pub external_code: Option<String>,
    /// Document date.
    pub moment: Option<Moment>,
    /// Whether the document is posted.
    pub applicable: Option<bool>,
    /// Currency and rate.
    pub rate: Option<Rate>,
    /// Total sum.
    pub sum: Option<f64>,
    /// Buyer organization.
    pub organization: Option<EntityRef>,
    /// Supplier counterparty.
    pub agent: Option<EntityRef>,
    /// Receiving store.
    pub store: Option<EntityRef>,
    /// Contract.
    pub contract: Option<EntityRef>,
    /// Workflow status.
    pub state: Option<EntityRef>,
    /// Supplier's document number.
    pub incoming_number: Option<String>,
    /// Supplier's document date.
    pub incoming_date: Option<Moment>,
    /// Purchase order the supply fulfils.
    pub purchase_order: Option<EntityRef>,
    /// Overhead costs spread over positions.
    pub overhead: Option<Value>,
    /// Whether VAT applies.
    pub vat_enabled: Option<bool>,
    /// Whether prices include VAT.
    pub vat_included: Option<bool>,
    /// VAT sum.
    pub vat_sum: Option<f64>,
    /// Paid sum.
    pub payed_sum: Option<f64>,
    /// Document lines.
    pub positions: Option<ListResponse<DocumentPosition>>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for Supply {
    const NAME: &'static str = "Supply";
    const TYPE: &'static str = "supply";
    const PATH: &'static str = "entity/supply";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for Supply {}

/// Body of `POST entity/supply`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupply {
    /// Buyer organization.
    pub organization: EntityRef,
    /// Supplier counterparty.
    pub agent: EntityRef,
    /// Receiving store.
    pub store: EntityRef,
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
    pub contract: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub state: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_number: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_date: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub purchase_order: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateSupply {
    /// Creates a body with the required references.
    #[must_use]
    pub fn new(organization: EntityRef, agent: EntityRef, store: EntityRef) -> Self {
        Self {
            organization,
            agent,
            store,
            name: Field::Unset,
            description: Field::Unset,
            external_code: Field::Unset,
            moment: Field::Unset,
            applicable: Field::Unset,
            rate: Field::Unset,
            contract: Field::Unset,
            state: Field::Unset,
            incoming_number: Field::Unset,
            incoming_date: Field::Unset,
            purchase_order: Field::Unset,
            vat_enabled: Field::Unset,
            vat_included: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateSupply {
    type Entity = Supply;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Supply::PATH.to_string()
    }
}

/// Body of `PUT entity/supply/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupply {
    /// Document id (path only).
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub organization: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub agent: Field<EntityRef>,
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
    pub contract: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub state: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_number: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_date: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub purchase_order: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateSupply {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateSupply {
    type Entity = Supply;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Supply::item_path(&self.id)
    }
}
