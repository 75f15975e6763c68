//! Move (transfer between stores) document.
//!
//! The Rust type is [`Move`]; the module is named `move_document` because
//! `move` is a keyword.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::{Document, Entity};
use crate::api::field::Field;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Rate};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A transfer of goods from `source_store` to `target_store`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Move {
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
    /// Store the goods leave.
    pub source_store: Option<EntityRef>,
    /// Store the goods arrive at.
    pub target_store: Option<EntityRef>,
    pub state: Option<EntityRef>,
    /// Internal order the move fulfils.
    pub internal_order: Option<EntityRef>,
    pub positions: Option<ListResponse<DocumentPosition>>,
    pub attributes: Option<Vec<Value>>,
}

impl Entity for Move {
    const NAME: &'static str = "Move";
    const TYPE: &'static str = "move";
    const PATH: &'static str = "entity/move";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Document for Move {}

/// Body of `POST entity/move`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMove {
    pub organization: EntityRef,
    pub source_store: EntityRef,
    pub target_store: EntityRef,
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
    pub internal_order: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl CreateMove {
    /// Creates a body with the organization and both stores.
    #[must_use]
    pub fn new(organization: EntityRef, source_store: EntityRef, target_store: EntityRef) -> Self {
        Self {
            organization,
            source_store,
            target_store,
            name: Field::Unset,
            description: Field::Unset,
            external_code: Field::Unset,
            moment: Field::Unset,
            applicable: Field::Unset,
            rate: Field::Unset,
            state: Field::Unset,
            internal_order: Field::Unset,
            positions: Field::Unset,
            attributes: Field::Unset,
        }
    }
}

impl WriteRequest for CreateMove {
    type Entity = Move;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Move::PATH.to_string()
    }
}

/// Body of `PUT entity/move/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMove {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub organization: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub source_store: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub target_store: Field<EntityRef>,
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
    pub internal_order: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub positions: Field<Vec<PositionInput>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub attributes: Field<Vec<Value>>,
}

impl UpdateMove {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateMove {
    type Entity = Move;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Move::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ApiRequest;
    use crate::config::BaseUrl;

    #[test]
    fn test_create_move_serializes_store_refs() {
        let base = BaseUrl::default();
        let request = CreateMove::new(
            EntityRef::entity(&base, "organization", "org-1"),
            EntityRef::entity(&base, "store", "from"),
            EntityRef::entity(&base, "store", "to"),
        );

        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/move");
        let body = pending.body.unwrap();
        assert!(body["sourceStore"]["meta"]["href"]
            .as_str()
            .unwrap()
            .ends_with("/entity/store/from"));
        assert!(body["targetStore"]["meta"]["href"]
            .as_str()
            .unwrap()
            .ends_with("/entity/store/to"));
    }

    #[test]
    fn test_update_move_retargets_store() {
        let mut request = UpdateMove::new("m-1");
        request.target_store = EntityRef::entity(&BaseUrl::default(), "store", "other").into();
        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/move/m-1");
        assert_eq!(pending.body.unwrap().as_object().unwrap().len(), 1);
    }
}
