//! Generic entity operations.
//!
//! Every MoySklad entity lives under a fixed path (e.g. `entity/product`)
//! and supports the same list, get and delete calls. The [`Entity`] trait
//! captures the path, and the request types here implement those calls
//! once for all entities.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::{ApiRequest, Entity, GetEntity, ListEntities, ListParams};
//! use moysklad_api::api::entities::Product;
//!
//! let request = ListEntities::<Product>::new(ListParams::new().limit(100).search("чай"));
//! let pending = request.to_request().unwrap();
//! assert_eq!(pending.path, "entity/product");
//!
//! let request = GetEntity::<Product>::new("19f1edc0");
//! assert_eq!(request.to_request().unwrap().path, "entity/product/19f1edc0");
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::errors::RequestError;
use crate::api::models::{DocumentPosition, EntityRef, ListResponse, Meta};
use crate::api::request::{decode, ApiRequest};
use crate::clients::{HttpMethod, HttpRequest};
use crate::config::BaseUrl;

/// A MoySklad entity type.
///
/// # Associated Constants
///
/// - `NAME`: Name used in error messages (e.g. "Product")
/// - `TYPE`: The `meta.type` value (e.g. "product")
/// - `PATH`: Collection path relative to the base URL (e.g. "entity/product")
pub trait Entity: DeserializeOwned + Send + Sync {
    /// Name used in error messages.
    const NAME: &'static str;

    /// The entity type as it appears in `meta.type`.
    const TYPE: &'static str;

    /// Collection path relative to the base URL.
    const PATH: &'static str;

    /// Returns this entity's meta, if the response carried one.
    fn meta(&self) -> Option<&Meta>;

    /// Path of a single entity.
    #[must_use]
    fn item_path(id: &str) -> String {
        format!("{}/{id}", Self::PATH)
    }

    /// Builds a reference to the entity with `id` under `base`.
    #[must_use]
    fn reference(base: &BaseUrl, id: &str) -> EntityRef {
        EntityRef::new(Meta::new(base.join(&Self::item_path(id)), Self::TYPE))
    }

    /// Returns a reference to this entity, for use in request bodies.
    #[must_use]
    fn to_ref(&self) -> Option<EntityRef> {
        self.meta().cloned().map(EntityRef::new)
    }
}

/// An entity with positions (`{PATH}/{id}/positions`).
pub trait Document: Entity {}

/// Query parameters accepted by list endpoints.
///
/// Filters are combined with `;`, which MoySklad reads as "and".
///
/// # Example
///
/// ```rust
/// use moysklad_api::api::ListParams;
///
/// let params = ListParams::new()
///     .limit(50)
///     .filter("archived=false")
///     .filter("pathName=Чай")
///     .order("name,desc");
///
/// assert_eq!(
///     params.to_query(),
///     vec![
///         ("limit".to_string(), "50".to_string()),
///         ("filter".to_string(), "archived=false;pathName=Чай".to_string()),
///         ("order".to_string(), "name,desc".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size (MoySklad allows up to 1000).
    pub limit: Option<u64>,
    /// Number of entities to skip.
    pub offset: Option<u64>,
    /// Full-text search.
    pub search: Option<String>,
    /// Filter expressions, joined with `;`.
    pub filters: Vec<String>,
    /// Sort order (e.g. `name,desc`).
    pub order: Option<String>,
    /// Nested fields to expand (e.g. `positions,agent`).
    pub expand: Option<String>,
}

impl ListParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the search string.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Adds a filter expression such as `name=Чай` or `updated>2024-01-01 00:00:00`.
    #[must_use]
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filters.push(expression.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Sets the fields to expand.
    #[must_use]
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Converts the parameters to query pairs, skipping unset values.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if !self.filters.is_empty() {
            query.push(("filter".to_string(), self.filters.join(";")));
        }
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        if let Some(expand) = &self.expand {
            query.push(("expand".to_string(), expand.clone()));
        }
        query
    }
}

/// Lists entities of type `E`.
#[derive(Debug, Clone)]
pub struct ListEntities<E> {
    /// Paging, search and filter parameters.
    pub params: ListParams,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ListEntities<E> {
    /// Creates the request.
    #[must_use]
    pub const fn new(params: ListParams) -> Self {
        Self {
            params,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> ApiRequest for ListEntities<E> {
    type Output = ListResponse<E>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, E::PATH)
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, E::NAME)
    }
}

/// Fetches a single entity of type `E` by id.
#[derive(Debug, Clone)]
pub struct GetEntity<E> {
    /// Entity id.
    pub id: String,
    /// Nested fields to expand.
    pub expand: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> GetEntity<E> {
    /// Creates the request.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expand: None,
            _entity: PhantomData,
        }
    }

    /// Expands nested fields in the response.
    #[must_use]
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }
}

impl<E: Entity> ApiRequest for GetEntity<E> {
    type Output = E;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, E::item_path(&self.id));
        if let Some(expand) = &self.expand {
            builder = builder.query_param("expand", expand.clone());
        }
        Ok(builder.build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, E::NAME)
    }
}

/// Deletes a single entity of type `E` by id.
#[derive(Debug, Clone)]
pub struct DeleteEntity<E> {
    /// Entity id.
    pub id: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> DeleteEntity<E> {
    /// Creates the request.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> ApiRequest for DeleteEntity<E> {
    type Output = ();

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Delete, E::item_path(&self.id))
            .allow_non_json(true)
            .build())
    }

    fn from_response(&self, _raw: Value) -> Result<Self::Output, RequestError> {
        Ok(())
    }
}

/// Lists the positions of document `D`.
#[derive(Debug, Clone)]
pub struct ListPositions<D> {
    /// Document id.
    pub id: String,
    /// Paging parameters.
    pub params: ListParams,
    _document: PhantomData<fn() -> D>,
}

impl<D: Document> ListPositions<D> {
    /// Creates the request.
    #[must_use]
    pub fn new(id: impl Into<String>, params: ListParams) -> Self {
        Self {
            id: id.into(),
            params,
            _document: PhantomData,
        }
    }
}

impl<D: Document> ApiRequest for ListPositions<D> {
    type Output = ListResponse<DocumentPosition>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        let path = format!("{}/positions", D::item_path(&self.id));
        Ok(HttpRequest::builder(HttpMethod::Get, path)
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "DocumentPosition")
    }
}

/// Follows a `nextHref`/`previousHref` link of a list response.
#[derive(Debug, Clone)]
pub struct FetchPage<E> {
    /// Absolute link returned by the API.
    pub href: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> FetchPage<E> {
    /// Creates the request.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> ApiRequest for FetchPage<E> {
    type Output = ListResponse<E>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, self.href.clone()).build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, E::NAME)
    }
}
