//! Purchase order (order to a supplier).
//!
//! Positions of a purchase order carry `shipped` and `in_transit`
//! quantities in addition to price and quantity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// An order placed with a supplier.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
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
    /// Planned delivery date.
    pub delivery_planned_moment: Option<Moment>,
    /// Whether VAT applies.
    pub vat_enabled: Option<bool>,
    /// Whether prices include VAT.
    pub vat_included: Option<bool>,
    /// VAT sum.
    pub vat_sum: Option<f64>,
    /// Paid sum.
    pub payed_sum: Option<f64>,
    /// Received sum.
    pub shipped_sum: Option<f64>,
    /// Invoiced sum.
    pub invoiced_sum: Option<f64>,
    /// Waiting sum.
    pub wait_sum: Option<f64>,
    /// Document lines.
    pub positions: Option<ListResponse<DocumentPosition>>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for PurchaseOrder {
    const NAME: &'static str = "PurchaseOrder";
    const TYPE: &'static str = "purchaseorder";
    const PATH: &'static str = "entity/purchaseorder";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for PurchaseOrder {}

/// Body of `POST entity/purchaseorder`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseOrder {
    /// Buyer organization.
    pub organization: EntityRef,
    /// Supplier counterparty.
    pub agent: EntityRef,
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

impl CreatePurchaseOrder {
    /// Creates a body with the organization and supplier.
    #[must_use]
    pub fn new(organization: EntityRef, agent: EntityRef) -> Self {
        Self {
            organization,
            agent,
            store: Field::Unset,
            name: Field::Unset,
            description: Field::Unset,
            external_code: Field::Unset,
            moment: Field::Unset,
            applicable: Field::Unset,
            rate: Field::Unset,
            contract: Field::Unset,
            state: Field::Unset,
            delivery_planned_moment: Field::Unset,
            vat_enabled: Field::Unset,
            vat_included: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreatePurchaseOrder {
    type Entity = PurchaseOrder;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        PurchaseOrder::PATH.to_string()
    }
}

/// Body of `PUT entity/purchaseorder/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePurchaseOrder {
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

impl UpdatePurchaseOrder {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdatePurchaseOrder {
    type Entity = PurchaseOrder;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        PurchaseOrder::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ApiRequest;
    use serde_json::json;

    #[test]
    fn test_purchase_order_positions_with_shipped() {
        let order: PurchaseOrder = serde_json::from_value(json!({
            "id": "po-1",
            "deliveryPlannedMoment": "2024-06-01 12:00:00.000",
            "positions": {
                "rows": [{"quantity": 10.0, "shipped": 4.0, "inTransit": 6.0}]
            }
        }))
        .unwrap();

        let row = &order.positions.unwrap().rows[0];
        assert_eq!(row.shipped, Some(4.0));
        assert_eq!(row.in_transit, Some(6.0));
        assert!(order.delivery_planned_moment.is_some());
    }

    #[test]
    fn test_clear_planned_delivery() {
        let mut request = UpdatePurchaseOrder::new("po-1");
        request.delivery_planned_moment = Field::Null;
        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/purchaseorder/po-1");
        assert_eq!(pending.body.unwrap(), json!({"deliveryPlannedMoment": null}));
    }
}
