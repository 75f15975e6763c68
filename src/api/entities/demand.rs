//! Demand (shipment) document.
//!
//! A demand ships goods from a store to a counterparty. Its positions are
//! available through [`ListPositions`](crate::api::ListPositions) or the
//! `get_demand_positions` facade method.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::entities::{CreateDemand, Demand};
//! use moysklad_api::api::{ApiRequest, EntityRef, PositionInput};
//! use moysklad_api::BaseUrl;
//!
//! let base = BaseUrl::default();
//! let mut request = CreateDemand::new(
//!     EntityRef::entity(&base, "organization", "org-1"),
//!     EntityRef::entity(&base, "counterparty", "agent-1"),
//!     EntityRef::entity(&base, "store", "store-1"),
//! );
//! request.positions = vec![PositionInput::new(EntityRef::entity(&base, "product", "p-1"), 2.0)].into();
//!
//! let pending = request.to_request().unwrap();
//! assert_eq!(pending.path, "entity/demand");
//! assert_eq!(pending.body.unwrap()["positions"][0]["quantity"], 2.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A shipment to a counterparty.
///
/// Sums are in kopecks. `positions` holds only a collection meta unless
/// the request expanded it.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
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
    /// Seller organization.
    pub organization: Option<EntityRef>,
    /// Buyer counterparty.
    pub agent: Option<EntityRef>,
    /// Store the goods leave.
    pub store: Option<EntityRef>,
    /// Contract.
    pub contract: Option<EntityRef>,
    /// Workflow status.
    pub state: Option<EntityRef>,
    /// Customer order the demand fulfils.
    pub customer_order: Option<EntityRef>,
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

impl Entity for Demand {
    const NAME: &'static str = "Demand";
    const TYPE: &'static str = "demand";
    const PATH: &'static str = "entity/demand";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for Demand {}

/// Body of `POST entity/demand`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDemand {
    /// Seller organization.
    pub organization: EntityRef,

    /// Buyer counterparty.
    pub agent: EntityRef,

    /// Store the goods leave.
    pub store: EntityRef,

    /// Document number. Generated when omitted.
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

    /// Customer order the demand fulfils.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub customer_order: Field<EntityRef>,

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

impl CreateDemand {
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
            customer_order: Field::Unset,
            vat_enabled: Field::Unset,
            vat_included: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateDemand {
    type Entity = Demand;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Demand::PATH.to_string()
    }
}

/// Body of `PUT entity/demand/{id}`.
///
/// Sending `positions` replaces all document lines.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDemand {
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
    pub customer_order: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vat_included: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateDemand {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateDemand {
    type Entity = Demand;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Demand::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::entity::{ListParams, ListPositions};
    use crate::api::request::ApiRequest;
    use serde_json::json;

    #[test]
    fn test_demand_with_expanded_positions() {
        let demand: Demand = serde_json::from_value(json!({
            "id": "d-1",
            "name": "00001",
            "moment": "2024-05-20 10:00:00.000",
            "applicable": true,
            "sum": 50000.0,
            "positions": {
                "meta": {"href": "https://x/entity/demand/d-1/positions", "type": "demandposition", "size": 1},
                "rows": [{"quantity": 2.0, "price": 25000.0}]
            }
        }))
        .unwrap();

        assert_eq!(demand.moment.unwrap().to_string(), "2024-05-20 10:00:00.000");
        let positions = demand.positions.unwrap();
        assert_eq!(positions.total(), Some(1));
        assert_eq!(positions.rows[0].price, Some(25000.0));
    }

    #[test]
    fn test_unpost_demand() {
        let mut request = UpdateDemand::new("d-1");
        request.applicable = false.into();
        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/demand/d-1");
        assert_eq!(pending.body.unwrap(), json!({"applicable": false}));
    }

    #[test]
    fn test_demand_positions_request() {
        let pending = ListPositions::<Demand>::new("d-1", ListParams::new())
            .to_request()
            .unwrap();
        assert_eq!(pending.path, "entity/demand/d-1/positions");
    }
}
