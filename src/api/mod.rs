//! Typed entity layer for the MoySklad API.
//!
//! This module maps MoySklad entities to Rust types and API operations to
//! request values:
//!
//! - **[`ApiRequest`] trait**: builds an [`HttpRequest`](crate::clients::HttpRequest)
//!   and parses the JSON reply
//! - **[`Entity`] trait**: the path and type of an entity, with generic
//!   [`ListEntities`], [`GetEntity`], [`DeleteEntity`] and [`ListPositions`]
//! - **[`WriteRequest`] trait**: create/update bodies
//! - **[`Field<T>`]**: optional body fields distinguishing "omit" from "null"
//! - **[`models`]**: meta, references, lists, timestamps, prices, positions
//! - **[`entities`]**: products, stores, documents, webhooks, stock reports, ...
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::api::entities::{CreateStore, Store};
//! use moysklad_api::api::{Entity, ListParams};
//!
//! let stores = client.get_stores(ListParams::new().limit(10)).await?;
//! for store in &stores.rows {
//!     println!("{:?}", store.name);
//! }
//!
//! let mut request = CreateStore::new("Склад №2");
//! request.address = "Москва, ул. Ленина, 1".to_string().into();
//! let created = client.create_store(&request).await?;
//! ```

mod entity;
mod errors;
mod field;
mod request;

pub mod entities;
pub mod models;

pub use entity::{
    DeleteEntity, Document, Entity, FetchPage, GetEntity, ListEntities, ListParams, ListPositions,
};
pub use errors::RequestError;
pub use field::Field;
pub use models::{
    Barcode, DocumentPosition, EntityRef, ListResponse, Meta, Moment, PositionInput, Price,
    PriceType, Rate, SalePrice,
};
pub use request::{decode, encode, ApiRequest, WriteRequest};
