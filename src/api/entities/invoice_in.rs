//! Incoming invoice (supplier's invoice).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// An invoice received from a supplier.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceIn {
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
    /// Store.
    pub store: Option<EntityRef>,
    /// Contract.
    pub contract: Option<EntityRef>,
    /// Workflow status.
    pub state: Option<EntityRef>,
    /// Supplier's invoice number.
    pub incoming_number: Option<String>,
    /// Supplier's invoice date.
    pub incoming_date: Option<Moment>,
    /// Planned payment date.
    pub payment_planned_moment: Option<Moment>,
    /// Purchase order the invoice belongs to.
    pub purchase_order: Option<EntityRef>,
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
    /// Document lines.
    pub positions: Option<ListResponse<DocumentPosition>>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for InvoiceIn {
    const NAME: &'static str = "InvoiceIn";
    const TYPE: &'static str = "invoicein";
    const PATH: &'static str = "entity/invoicein";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for InvoiceIn {}

/// Body of `POST entity/invoicein`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceIn {
    /// Buyer organization.
    pub organization: EntityRef,

    /// Supplier counterparty.
    pub agent: EntityRef,

    /// Store.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub store: Field<EntityRef>,

    /// Document number.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    /// Comment.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    /// External code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,

    /// Document date.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub moment: Field<Moment>,

    /// Whether the document is posted.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub applicable: Field<bool>,

    /// Currency and rate.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub rate: Field<Rate>,

    /// Contract.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub contract: Field<EntityRef>,

    /// Workflow status.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub state: Field<EntityRef>,

    /// Supplier's invoice number.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_number: Field<String>,

    /// Supplier's invoice date.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub incoming_date: Field<Moment>,

    /// Planned payment date.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub payment_planned_moment: Field<Moment>,

    /// Purchase order the invoice belongs to.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub purchase_order: Field<EntityRef>,

    /// Whether VAT applies.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,

    /// Whether prices include VAT.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,

    /// Document lines.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,

    /// Additional fields.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateInvoiceIn {
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
            incoming_number: Field::Unset,
            incoming_date: Field::Unset,
            payment_planned_moment: Field::Unset,
            purchase_order: Field::Unset,
            vat_enabled: Field::Unset,
            vat_included: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateInvoiceIn {
    type Entity = InvoiceIn;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        InvoiceIn::PATH.to_string()
    }
}

/// Body of `PUT entity/invoicein/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceIn {
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
    pub payment_planned_moment: Field<Moment>,
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

impl UpdateInvoiceIn {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateInvoiceIn {
    type Entity = InvoiceIn;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        InvoiceIn::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::entity::{ListParams, ListPositions};
    use crate::api::request::ApiRequest;
    use crate::config::BaseUrl;
    use serde_json::json;

    #[test]
    fn test_create_invoice_links_purchase_order() {
        let base = BaseUrl::default();
        let mut request = CreateInvoiceIn::new(
            EntityRef::entity(&base, "organization", "org-1"),
            EntityRef::entity(&base, "counterparty", "sup-1"),
        );
        request.purchase_order = EntityRef::entity(&base, "purchaseorder", "po-1").into();

        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/invoicein");
        assert_eq!(
            pending.body.unwrap()["purchaseOrder"]["meta"]["type"],
            json!("purchaseorder")
        );
    }

    #[test]
    fn test_invoice_positions_path() {
        let pending = ListPositions::<InvoiceIn>::new("inv-1", ListParams::new().limit(100))
            .to_request()
            .unwrap();
        assert_eq!(pending.path, "entity/invoicein/inv-1/positions");
        assert_eq!(pending.query, vec![("limit".to_string(), "100".to_string())]);
    }
}
