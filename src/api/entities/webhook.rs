//! Webhook entity.
//!
//! A webhook asks MoySklad to call `url` whenever an entity of
//! `entity_type` is created, updated, deleted or processed. With
//! [`DiffType::Fields`] update notifications list the changed fields.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::entities::{CreateWebhook, DiffType, WebhookAction};
//! use moysklad_api::api::ApiRequest;
//!
//! let mut request = CreateWebhook::new("https://example.com/hooks", WebhookAction::Update, "product");
//! request.diff_type = DiffType::Fields.into();
//!
//! let pending = request.to_request().unwrap();
//! assert_eq!(pending.path, "entity/webhook");
//! assert_eq!(pending.body.unwrap()["diffType"], "FIELDS");
//! ```

use serde::{Deserialize, Serialize};

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::{EntityRef, Meta};
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// The event that triggers a webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookAction {
    /// Entity created.
    Create,
    /// Entity updated.
    Update,
    /// Entity deleted.
    Delete,
    /// Asynchronous task processed.
    Processed,
}

/// Format of update notifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffType {
    /// Only the entity link.
    None,
    /// The entity link plus the changed field names.
    Fields,
}

/// A webhook subscription.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook meta.
    pub meta: Option<Meta>,
    /// Webhook id.
    pub id: Option<String>,
    /// Account id.
    pub account_id: Option<String>,
    /// Application that created it, if any.
    pub author_application: Option<EntityRef>,
    /// URL that receives notifications.
    pub url: Option<String>,
    /// Triggering event.
    pub action: Option<WebhookAction>,
    /// Entity type watched, e.g. "product".
    pub entity_type: Option<String>,
    /// Notification format for updates.
    pub diff_type: Option<DiffType>,
    /// Whether the webhook is active.
    pub enabled: Option<bool>,
    /// HTTP method used for notifications (always POST).
    pub method: Option<String>,
}

impl Entity for Webhook {
    const NAME: &'static str = "Webhook";
    const TYPE: &'static str = "webhook";
    const PATH: &'static str = "entity/webhook";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/webhook`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhook {
    /// URL that receives notifications.
    pub url: String,

    /// Triggering event.
    pub action: WebhookAction,

    /// Entity type watched.
    pub entity_type: String,

    /// Notification format for updates.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub diff_type: Field<DiffType>,

    /// Whether the webhook is active.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub enabled: Field<bool>,
}

impl CreateWebhook {
    /// Creates a subscription body.
    #[must_use]
    pub fn new(url: impl Into<String>, action: WebhookAction, entity_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            action,
            entity_type: entity_type.into(),
            diff_type: Field::Unset,
            enabled: Field::Unset,
        }
    }
}

impl WriteRequest for CreateWebhook {
    type Entity = Webhook;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        Webhook::PATH.to_string()
    }
}

/// Body of `PUT entity/webhook/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhook {
    /// Webhook id (path only).
    #[serde(skip)]
    pub id: String,

    /// URL that receives notifications.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub url: Field<String>,

    /// Triggering event.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub action: Field<WebhookAction>,

    /// Entity type watched.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub entity_type: Field<String>,

    /// Notification format for updates.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub diff_type: Field<DiffType>,

    /// Whether the webhook is active.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub enabled: Field<bool>,
}

impl UpdateWebhook {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateWebhook {
    type Entity = Webhook;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        Webhook::item_path(&self.id)
    }
}
