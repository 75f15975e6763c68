//! Bonus transaction entity.
//!
//! A bonus transaction earns or spends points of a counterparty within a
//! [`BonusProgram`](super::BonusProgram).
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::entities::{BonusTransactionType, CreateBonusTransaction};
//! use moysklad_api::api::{ApiRequest, EntityRef};
//! use moysklad_api::BaseUrl;
//!
//! let base = BaseUrl::default();
//! let mut request = CreateBonusTransaction::new(
//!     EntityRef::entity(&base, "counterparty", "agent-1"),
//!     EntityRef::entity(&base, "bonusprogram", "bp-1"),
//!     BonusTransactionType::Earning,
//! );
//! request.bonus_value = 150.into();
//!
//! let body = request.to_request().unwrap().body.unwrap();
//! assert_eq!(body["transactionType"], "EARNING");
//! assert_eq!(body["bonusValue"], 150);
//! ```

use serde::{Deserialize, Serialize};

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta, Moment};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// Direction of a bonus transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusTransactionType {
    /// Points are added.
    Earning,
    /// Points are spent.
    Spending,
}

/// Processing state of a bonus transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusTransactionStatus {
    /// Waiting for the execution date.
    WaitProcessing,
    /// Applied.
    Completed,
    /// Cancelled.
    Canceled,
}

/// Origin of a bonus transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusTransactionCategory {
    /// Ordinary earning or spending.
    Regular,
    /// Welcome points.
    Welcome,
}

/// A bonus points operation.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BonusTransaction {
    /// Transaction meta.
    pub meta: Option<Meta>,
    /// Transaction id.
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
    /// Transaction number.
    pub name: Option<String>,
    /// Comment.
    pub description: Option<String>,
    /// External code.
    pub external_code: Option<String>,
    /// Transaction date.
    pub moment: Option<Moment>,
    /// Whether the transaction is posted.
    pub applicable: Option<bool>,
    /// Counterparty whose points change.
    pub agent: Option<EntityRef>,
    /// Program the points belong to.
    pub bonus_program: Option<EntityRef>,
    /// Number of points.
    pub bonus_value: Option<i64>,
    /// Earning or spending.
    pub transaction_type: Option<BonusTransactionType>,
    /// Processing state.
    pub transaction_status: Option<BonusTransactionStatus>,
    /// Regular or welcome.
    pub category_type: Option<BonusTransactionCategory>,
    /// When the points are applied.
    pub execution_date: Option<Moment>,
    /// Organization.
    pub organization: Option<EntityRef>,
    /// Related retail demand or other document.
    pub parent_document: Option<EntityRef>,
}

impl Entity for BonusTransaction {
    const NAME: &'static str = "BonusTransaction";
    const TYPE: &'static str = "bonustransaction";
    const PATH: &'static str = "entity/bonustransaction";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/bonustransaction`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBonusTransaction {
    /// Counterparty whose points change.
    pub agent: EntityRef,

    /// Program the points belong to.
    pub bonus_program: EntityRef,

    /// Earning or spending.
    pub transaction_type: BonusTransactionType,

    /// Number of points.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub bonus_value: Field<i64>,

    /// Processing state.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_status: Field<BonusTransactionStatus>,

    /// Regular or welcome.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub category_type: Field<BonusTransactionCategory>,

    /// When the points are applied.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub execution_date: Field<Moment>,

    /// Transaction date.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub moment: Field<Moment>,

    /// Transaction number.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    /// Comment.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,

    /// External code.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,

    /// Organization.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub organization: Field<EntityRef>,

    /// Whether the transaction is posted.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub applicable: Field<bool>,
}

impl CreateBonusTransaction {
    /// Creates a body with the counterparty, program and direction.
    #[must_use]
    pub const fn new(
        agent: EntityRef,
        bonus_program: EntityRef,
        transaction_type: BonusTransactionType,
    ) -> Self {
        Self {
            agent,
            bonus_program,
            transaction_type,
            bonus_value: Field::Unset,
            transaction_status: Field::Unset,
            category_type: Field::Unset,
            execution_date: Field::Unset,
            moment: Field::Unset,
            name: Field::Unset,
            description: Field::Unset,
            external_code: Field::Unset,
            organization: Field::Unset,
            applicable: Field::Unset,
        }
    }
}

impl WriteRequest for CreateBonusTransaction {
    type Entity = BonusTransaction;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        BonusTransaction::PATH.to_string()
    }
}

/// Body of `PUT entity/bonustransaction/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBonusTransaction {
    /// Transaction id (path only).
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub agent: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub bonus_program: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_type: Field<BonusTransactionType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub bonus_value: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_status: Field<BonusTransactionStatus>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub category_type: Field<BonusTransactionCategory>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub execution_date: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub moment: Field<Moment>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub organization: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub applicable: Field<bool>,
}

impl UpdateBonusTransaction {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateBonusTransaction {
    type Entity = BonusTransaction;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        BonusTransaction::item_path(&self.id)
    }
}
