//! Stock reports.
//!
//! Two families of reports exist, and they format their filters
//! differently:
//!
//! - **Full reports** (`report/stock/all`, `report/stock/bystore`) take
//!   one `key=value` pair per value, joined with `;`:
//!   `filter=store=<href>;store=<href>;stockMode=all`.
//! - **Current reports** (`report/stock/all/current`,
//!   `report/stock/bystore/current`) take comma-joined ids under a single
//!   key: `filter=assortmentId=a,b;storeId=c`. They return a bare JSON
//!   array rather than a list envelope.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::api::entities::stock::{CurrentStockParams, StockMode, StockReportParams, StockType};
//!
//! let params = StockReportParams::new()
//!     .store("https://api.moysklad.ru/api/remap/1.2/entity/store/s-1")
//!     .store("https://api.moysklad.ru/api/remap/1.2/entity/store/s-2")
//!     .stock_mode(StockMode::All);
//! assert_eq!(
//!     params.filter().as_deref(),
//!     Some(
//!         "store=https://api.moysklad.ru/api/remap/1.2/entity/store/s-1;\
//!          store=https://api.moysklad.ru/api/remap/1.2/entity/store/s-2;\
//!          stockMode=all"
//!     )
//! );
//!
//! let params = CurrentStockParams::new()
//!     .assortment_id("a")
//!     .assortment_id("b")
//!     .store_id("c")
//!     .stock_type(StockType::FreeStock);
//! assert_eq!(params.filter().as_deref(), Some("assortmentId=a,b;storeId=c"));
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::api::errors::RequestError;
use crate::api::models::{ListResponse, Meta, Moment};
use crate::api::request::{decode, ApiRequest};
use crate::clients::{HttpMethod, HttpRequest};

/// Which rows a full stock report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockMode {
    /// Every product, with or without stock.
    All,
    /// Positive stock only.
    PositiveOnly,
    /// Negative stock only.
    NegativeOnly,
    /// Zero stock only.
    Empty,
    /// Non-zero stock.
    NonEmpty,
    /// Stock below the product's minimum balance.
    UnderMinimum,
}

impl StockMode {
    /// Returns the value used in the report filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PositiveOnly => "positiveOnly",
            Self::NegativeOnly => "negativeOnly",
            Self::Empty => "empty",
            Self::NonEmpty => "nonEmpty",
            Self::UnderMinimum => "underMinimum",
        }
    }
}

/// Which quantity a current stock report returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockType {
    /// Physical stock (the default).
    Stock,
    /// Stock minus reserve.
    FreeStock,
    /// Stock minus reserve plus in transit.
    Quantity,
    /// Reserved quantity.
    Reserve,
    /// Quantity in transit.
    InTransit,
}

impl StockType {
    /// Returns the `stockType` query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::FreeStock => "freeStock",
            Self::Quantity => "quantity",
            Self::Reserve => "reserve",
            Self::InTransit => "inTransit",
        }
    }
}

/// Parameters of `report/stock/all` and `report/stock/bystore`.
///
/// Stores, products and folders are given as entity hrefs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockReportParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub stores: Vec<String>,
    pub products: Vec<String>,
    pub product_folders: Vec<String>,
    pub stock_mode: Option<StockMode>,
    /// Report date; the current stock when unset.
    pub moment: Option<Moment>,
    pub search: Option<String>,
    /// `product`, `variant` or `consignment`.
    pub group_by: Option<String>,
}

impl StockReportParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a store href.
    #[must_use]
    pub fn store(mut self, href: impl Into<String>) -> Self {
        self.stores.push(href.into());
        self
    }

    /// Adds a product href.
    #[must_use]
    pub fn product(mut self, href: impl Into<String>) -> Self {
        self.products.push(href.into());
        self
    }

    /// Adds a product folder href.
    #[must_use]
    pub fn product_folder(mut self, href: impl Into<String>) -> Self {
        self.product_folders.push(href.into());
        self
    }

    #[must_use]
    pub const fn stock_mode(mut self, mode: StockMode) -> Self {
        self.stock_mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn moment(mut self, moment: Moment) -> Self {
        self.moment = Some(moment);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Builds the `filter` value, repeating the key for every value.
    #[must_use]
    pub fn filter(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.stores.iter().map(|href| format!("store={href}")));
        parts.extend(self.products.iter().map(|href| format!("product={href}")));
        parts.extend(
            self.product_folders
                .iter()
                .map(|href| format!("productFolder={href}")),
        );
        if let Some(mode) = self.stock_mode {
            parts.push(format!("stockMode={}", mode.as_str()));
        }
        if let Some(moment) = &self.moment {
            parts.push(format!("moment={moment}"));
        }
        if let Some(search) = &self.search {
            parts.push(format!("search={search}"));
        }
        (!parts.is_empty()).then(|| parts.join(";"))
    }

    /// Converts the parameters to query pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(group_by) = &self.group_by {
            query.push(("groupBy".to_string(), group_by.clone()));
        }
        if let Some(filter) = self.filter() {
            query.push(("filter".to_string(), filter));
        }
        query
    }
}

/// Parameters of `report/stock/all/current` and `report/stock/bystore/current`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentStockParams {
    /// Product, variant or bundle ids.
    pub assortment_ids: Vec<String>,
    /// Store ids.
    pub store_ids: Vec<String>,
    /// Quantity to report.
    pub stock_type: Option<StockType>,
    /// Include rows with zero stock.
    pub include_zero_lines: bool,
    /// Only rows changed since this moment.
    pub changed_since: Option<Moment>,
}

impl CurrentStockParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assortment id.
    #[must_use]
    pub fn assortment_id(mut self, id: impl Into<String>) -> Self {
        self.assortment_ids.push(id.into());
        self
    }

    /// Adds a store id.
    #[must_use]
    pub fn store_id(mut self, id: impl Into<String>) -> Self {
        self.store_ids.push(id.into());
        self
    }

    #[must_use]
    pub const fn stock_type(mut self, stock_type: StockType) -> Self {
        self.stock_type = Some(stock_type);
        self
    }

    #[must_use]
    pub const fn include_zero_lines(mut self, include: bool) -> Self {
        self.include_zero_lines = include;
        self
    }

    #[must_use]
    pub const fn changed_since(mut self, moment: Moment) -> Self {
        self.changed_since = Some(moment);
        self
    }

    /// Builds the `filter` value, comma-joining ids under one key.
    #[must_use]
    pub fn filter(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.assortment_ids.is_empty() {
            parts.push(format!("assortmentId={}", self.assortment_ids.join(",")));
        }
        if !self.store_ids.is_empty() {
            parts.push(format!("storeId={}", self.store_ids.join(",")));
        }
        (!parts.is_empty()).then(|| parts.join(";"))
    }

    /// Converts the parameters to query pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(filter) = self.filter() {
            query.push(("filter".to_string(), filter));
        }
        if let Some(stock_type) = self.stock_type {
            query.push(("stockType".to_string(), stock_type.as_str().to_string()));
        }
        if self.include_zero_lines {
            query.push(("include".to_string(), "zeroLines".to_string()));
        }
        if let Some(moment) = &self.changed_since {
            query.push(("changedSince".to_string(), moment.to_string()));
        }
        query
    }
}

/// A row of `report/stock/all`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    /// Meta of the product, variant or consignment.
    pub meta: Option<Meta>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub article: Option<String>,
    pub external_code: Option<String>,
    /// Product folder.
    pub folder: Option<Value>,
    pub uom: Option<Value>,
    /// Cost price in kopecks.
    pub price: Option<f64>,
    /// Sale price in kopecks.
    pub sale_price: Option<f64>,
    pub stock: Option<f64>,
    pub reserve: Option<f64>,
    pub in_transit: Option<f64>,
    /// Stock minus reserve plus in transit.
    pub quantity: Option<f64>,
    /// Days the goods have been in stock.
    pub stock_days: Option<f64>,
}

/// Stock of one product in one store.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreStock {
    /// Store meta.
    pub meta: Option<Meta>,
    /// Store name.
    pub name: Option<String>,
    pub stock: Option<f64>,
    pub reserve: Option<f64>,
    pub in_transit: Option<f64>,
}

/// A row of `report/stock/bystore`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockByStoreRow {
    /// Meta of the product, variant or consignment.
    pub meta: Option<Meta>,
    /// Per-store balances.
    pub stock_by_store: Option<Vec<StoreStock>>,
}

/// A row of the current stock reports.
///
/// Only the quantity requested through [`StockType`] is present.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStock {
    pub assortment_id: Option<String>,
    /// Present in the by-store report only.
    pub store_id: Option<String>,
    pub stock: Option<f64>,
    pub free_stock: Option<f64>,
    pub quantity: Option<f64>,
    pub reserve: Option<f64>,
    pub in_transit: Option<f64>,
}

/// `GET report/stock/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockReport {
    pub params: StockReportParams,
}

impl StockReport {
    #[must_use]
    pub const fn new(params: StockReportParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for StockReport {
    type Output = ListResponse<StockRow>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, "report/stock/all")
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "StockRow")
    }
}

/// `GET report/stock/bystore`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockByStoreReport {
    pub params: StockReportParams,
}

impl StockByStoreReport {
    #[must_use]
    pub const fn new(params: StockReportParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for StockByStoreReport {
    type Output = ListResponse<StockByStoreRow>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, "report/stock/bystore")
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "StockByStoreRow")
    }
}

/// `GET report/stock/all/current`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentStockReport {
    pub params: CurrentStockParams,
}

impl CurrentStockReport {
    #[must_use]
    pub const fn new(params: CurrentStockParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for CurrentStockReport {
    type Output = Vec<CurrentStock>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::builder(HttpMethod::Get, "report/stock/all/current")
            .query(self.params.to_query())
            .build())
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CurrentStock")
    }
}

/// `GET report/stock/bystore/current`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentStockByStoreReport {
    pub params: CurrentStockParams,
}

impl CurrentStockByStoreReport {
    #[must_use]
    pub const fn new(params: CurrentStockParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for CurrentStockByStoreReport {
    type Output = Vec<CurrentStock>;

    fn to_request(&self) -> Result<HttpRequest, RequestError> {
        Ok(
            HttpRequest::builder(HttpMethod::Get, "report/stock/bystore/current")
                .query(self.params.to_query())
                .build(),
        )
    }

    fn from_response(&self, raw: Value) -> Result<Self::Output, RequestError> {
        decode(raw, "CurrentStock")
    }
}
