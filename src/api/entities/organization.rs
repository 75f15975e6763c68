//! Organization entity (the account's own legal entities).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta, Moment};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// Legal form of an organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// Legal entity.
    Legal,
    /// Individual entrepreneur.
    Entrepreneur,
    /// Individual.
    Individual,
}

/// An organization of the account.
///
/// Documents reference one as their `organization`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization meta.
    pub meta: Option<Meta>,
    /// Organization id.
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
    /// Short name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Code.
    pub code: Option<String>,
    /// External code.
    pub external_code: Option<String>,
    /// Whether the organization is archived.
    pub archived: Option<bool>,
    /// Legal form.
    pub company_type: Option<CompanyType>,
    /// Full legal name.
    pub legal_title: Option<String>,
    /// Legal address as one line.
    pub legal_address: Option<String>,
    /// Actual address as one line.
    pub actual_address: Option<String>,
    /// INN (taxpayer number).
    pub inn: Option<String>,
    /// KPP (tax registration reason code).
    pub kpp: Option<String>,
    /// OGRN.
    pub ogrn: Option<String>,
    /// OKPO.
    pub okpo: Option<String>,
    /// E-mail.
    pub email: Option<String>,
    /// Phone.
    pub phone: Option<String>,
    /// Whether EGAIS integration is enabled.
    pub is_egais_enable: Option<bool>,
    /// Bank accounts.
    pub accounts: Option<Value>,
    /// Additional fields.
    pub attributes: Option<Vec<Value>>,
}

impl Entity for Organization {
    const NAME: &'static str = "Organization";
    const TYPE: &'static str = "organization";
    const PATH: &'static str = "entity/organization";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/organization`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganization {
    /// Short name.
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

    /// Legal form.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_type: Field<CompanyType>,

    /// Full legal name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub legal_title: Field<String>,

    /// Legal address.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub legal_address: Field<String>,

    /// Actual address.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub actual_address: Field<String>,

    /// INN.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inn: Field<String>,

    /// KPP.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub kpp: Field<String>,

    /// OGRN.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub ogrn: Field<String>,

    /// E-mail.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,

    /// Phone.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
}

impl CreateOrganization {
    /// Creates a body with only the name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Field::Unset,
            code: Field::Unset,
            external_code: Field::Unset,
            company_type: Field::Unset,
            legal_title: Field::Unset,
            legal_address: Field::Unset,
            actual_address: Field::Unset,
            inn: Field::Unset,
            kpp: Field::Unset,
            ogrn: Field::Unset,
            email: Field::Unset,
            phone: Field::Unset,
        }
    }
}

impl WriteRequest for CreateOrganization {
    type Entity = Organization;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Organization::PATH.to_string()
    }
}

/// Body of `PUT entity/organization/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
    /// Organization id (path only).
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_code: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub archived: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_type: Field<CompanyType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub legal_title: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub legal_address: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub actual_address: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inn: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub kpp: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub ogrn: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
}

impl UpdateOrganization {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateOrganization {
    type Entity = Organization;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Organization::item_path(&self.id)
    }
}
