//! Entity metadata, references and list envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::entity::ListParams;
use crate::config::BaseUrl;

/// The `meta` object MoySklad attaches to every entity and collection.
///
/// For single entities `href` and `type` identify the object. For
/// collections `size`, `limit`, `offset` and the `nextHref`/`previousHref`
/// links describe the page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Link to the entity or collection.
    #[serde(default)]
    pub href: String,

    /// Link to the entity type's metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_href: Option<String>,

    /// Entity type name (e.g. "product", "demand").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// Media type of the linked resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Link to the entity in the web UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid_href: Option<String>,

    /// Download link, for files and images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,

    /// Total number of items in a collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Page size of a collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Offset of this page in a collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_href: Option<String>,

    /// Link to the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_href: Option<String>,
}

impl Meta {
    /// Creates a meta for an entity link.
    #[must_use]
    pub fn new(href: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            entity_type: Some(entity_type.into()),
            media_type: Some("application/json".to_string()),
            ..Default::default()
        }
    }

    /// Creates the meta of `entity/{entity_type}/{id}` under `base`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moysklad_api::api::Meta;
    /// use moysklad_api::BaseUrl;
    ///
    /// let meta = Meta::entity(&BaseUrl::default(), "store", "7944ef04-f831-11e5-7a69-971500188b19");
    /// assert_eq!(
    ///     meta.href,
    ///     "https://api.moysklad.ru/api/remap/1.2/entity/store/7944ef04-f831-11e5-7a69-971500188b19"
    /// );
    /// assert_eq!(meta.id(), Some("7944ef04-f831-11e5-7a69-971500188b19"));
    /// ```
    #[must_use]
    pub fn entity(base: &BaseUrl, entity_type: &str, id: &str) -> Self {
        Self::new(base.join(&format!("entity/{entity_type}/{id}")), entity_type)
    }

    /// Returns the trailing id segment of `href`, ignoring any query string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let path = self.href.split('?').next().unwrap_or_default();
        path.rsplit('/').next().filter(|id| !id.is_empty())
    }
}

/// A `{"meta": {...}}` reference to another entity.
///
/// This is how request bodies point at organizations, stores, products and
/// other related objects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EntityRef {
    /// The referenced entity's meta.
    pub meta: Meta,
}

impl EntityRef {
    /// Wraps a meta into a reference.
    #[must_use]
    pub const fn new(meta: Meta) -> Self {
        Self { meta }
    }

    /// References `entity/{entity_type}/{id}` under `base`.
    #[must_use]
    pub fn entity(base: &BaseUrl, entity_type: &str, id: &str) -> Self {
        Self::new(Meta::entity(base, entity_type, id))
    }

    /// Returns the referenced entity's id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.meta.id()
    }
}

impl From<Meta> for EntityRef {
    fn from(meta: Meta) -> Self {
        Self::new(meta)
    }
}

/// A page of entities.
///
/// Also used for nested collections (such as document positions), which
/// carry only `meta` unless expanded.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    /// Request context (employee meta).
    #[serde(default)]
    pub context: Option<Value>,

    /// Collection meta with paging information.
    #[serde(default)]
    pub meta: Option<Meta>,

    /// The entities on this page.
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Returns `true` if the API reported a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|m| m.next_href.is_some())
    }

    /// Returns the total number of entities, if reported.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.meta.as_ref().and_then(|m| m.size)
    }

    /// Returns paging parameters for the next page.
    ///
    /// The offset advances by the page limit. Returns `None` when there is
    /// no next page.
    #[must_use]
    pub fn next_page_params(&self) -> Option<ListParams> {
        let meta = self.meta.as_ref().filter(|m| m.next_href.is_some())?;
        let limit = meta.limit.unwrap_or(self.rows.len() as u64);
        let offset = meta.offset.unwrap_or(0) + limit;
        Some(ListParams::new().limit(limit).offset(offset))
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            context: None,
            meta: None,
            rows: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_deserializes_entity_type() {
        let meta: Meta = serde_json::from_value(json!({
            "href": "https://api.moysklad.ru/api/remap/1.2/entity/product/19f1edc0-fc42-4001-94cb-c9ec9c62ec10",
            "metadataHref": "https://api.moysklad.ru/api/remap/1.2/entity/product/metadata",
            "type": "product",
            "mediaType": "application/json",
            "uuidHref": "https://online.moysklad.ru/app/#good/edit?id=19f1edc0"
        }))
        .unwrap();

        assert_eq!(meta.entity_type.as_deref(), Some("product"));
        assert_eq!(meta.id(), Some("19f1edc0-fc42-4001-94cb-c9ec9c62ec10"));
        assert!(meta.size.is_none());
    }

    #[test]
    fn test_meta_id_ignores_query() {
        let meta = Meta::new("https://x/entity/store/abc?expand=parent", "store");
        assert_eq!(meta.id(), Some("abc"));
    }

    #[test]
    fn test_entity_ref_serializes_as_meta_wrapper() {
        let reference = EntityRef::entity(&BaseUrl::default(), "organization", "org-1");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({
                "meta": {
                    "href": "https://api.moysklad.ru/api/remap/1.2/entity/organization/org-1",
                    "type": "organization",
                    "mediaType": "application/json"
                }
            })
        );
    }

    #[test]
    fn test_list_response_with_missing_rows() {
        let list: ListResponse<Value> = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/demand/1/positions", "type": "demandposition", "size": 3}
        }))
        .unwrap();
        assert!(list.rows.is_empty());
        assert_eq!(list.total(), Some(3));
        assert!(!list.has_next_page());
        assert!(list.next_page_params().is_none());
    }

    #[test]
    fn test_next_page_params_advance_by_limit() {
        let list: ListResponse<Value> = serde_json::from_value(json!({
            "meta": {
                "href": "https://x/entity/product",
                "size": 2500,
                "limit": 1000,
                "offset": 1000,
                "nextHref": "https://x/entity/product?limit=1000&offset=2000"
            },
            "rows": []
        }))
        .unwrap();

        let params = list.next_page_params().unwrap();
        assert_eq!(params.limit, Some(1000));
        assert_eq!(params.offset, Some(2000));
    }
}
