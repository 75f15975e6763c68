//! # MoySklad API Rust SDK
//!
//! A typed async client for the MoySklad JSON API (ReMap 1.2).
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MoySkladConfig`] and [`MoySkladConfigBuilder`]
//! - Basic-Auth credential resolution from login/password or a pre-encoded token
//! - An async HTTP dispatcher with retry on network errors and 5xx responses
//! - Typed models and request bodies for products, stores, documents,
//!   webhooks, loyalty programs, custom entities and stock reports
//! - [`MoySkladClient`] with one async method per API operation
//!
//! ## Quick Start
//!
//! ```rust
//! use moysklad_api::{MoySkladClient, MoySkladConfig};
//!
//! let config = MoySkladConfig::builder()
//!     .login("admin@company")
//!     .password("secret")
//!     .auto_retry_count(3)
//!     .build()
//!     .unwrap();
//!
//! let client = MoySkladClient::new(config).unwrap();
//! assert_eq!(client.token().decode().unwrap(), "admin@company:secret");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use moysklad_api::api::entities::{CreateProduct, UpdateProduct};
//! use moysklad_api::api::{Field, ListParams};
//!
//! // List with filter and paging
//! let page = client
//!     .get_products(ListParams::new().limit(100).filter("archived=false"))
//!     .await?;
//!
//! // Create: only the fields you set are sent
//! let mut request = CreateProduct::new("Чай зелёный");
//! request.article = "TEA-01".to_string().into();
//! let product = client.create_product(&request).await?;
//!
//! // Update: Field::Null clears a value
//! let mut update = UpdateProduct::new(product.id.unwrap());
//! update.description = Field::Null;
//! client.update_product(&update).await?;
//! ```
//!
//! ## Error Handling
//!
//! Facade methods return [`api::RequestError`]. API failures carry the
//! MoySklad error payload:
//!
//! ```rust,ignore
//! use moysklad_api::api::RequestError;
//! use moysklad_api::HttpError;
//!
//! match client.get_product("missing").await {
//!     Err(RequestError::Http(HttpError::Api(e))) => {
//!         println!("{} (code {:?})", e.message(), e.code());
//!     }
//!     Err(e) => return Err(e.into()),
//!     Ok(product) => println!("{:?}", product.name),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Retries are logged at `warn`; with `debug(true)` every request and
//! response is logged at `debug`.

pub mod api;
pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;

pub use auth::{resolve_credential, BasicAuthToken, Credential};
pub use client::MoySkladClient;
pub use clients::{ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, UnexpectedContentTypeError};
pub use config::{BaseUrl, MoySkladConfig, MoySkladConfigBuilder, RetryPolicy};
pub use error::ConfigError;
