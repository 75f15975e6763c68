//! MoySklad entities.
//!
//! Each module defines the entity model (every field optional, so partial
//! responses parse) and its `Create*`/`Update*` request bodies.
//!
//! # Catalog
//!
//! - [`Product`], [`ProductFolder`]
//! - [`Store`], [`Organization`], [`Currency`]
//!
//! # Documents
//!
//! These implement [`Document`](crate::api::Document) and expose positions:
//!
//! - [`Demand`], [`Supply`], [`Move`]
//! - [`PurchaseOrder`], [`InternalOrder`], [`InvoiceIn`]
//!
//! # Other
//!
//! - [`Webhook`]
//! - [`BonusProgram`], [`BonusTransaction`]
//! - [`CustomEntity`] and its elements
//! - Stock reports in [`stock`]

mod bonus_program;
mod bonus_transaction;
mod currency;
mod custom_entity;
mod demand;
mod internal_order;
mod invoice_in;
mod move_document;
mod organization;
mod product;
mod product_folder;
mod purchase_order;
mod store;
mod supply;
mod webhook;

pub mod stock;

pub use bonus_program::{BonusProgram, CreateBonusProgram, UpdateBonusProgram};
pub use bonus_transaction::{
    BonusTransaction, BonusTransactionCategory, BonusTransactionStatus, BonusTransactionType,
    CreateBonusTransaction, UpdateBonusTransaction,
};
pub use currency::{CreateCurrency, Currency, RateUpdateType, UpdateCurrency};
pub use custom_entity::{
    CreateCustomEntity, CreateCustomEntityElement, CustomEntity, CustomEntityElement,
    DeleteCustomEntity, DeleteCustomEntityElement, GetCustomEntityElement,
    ListCustomEntityElements, UpdateCustomEntity, UpdateCustomEntityElement,
};
pub use demand::{CreateDemand, Demand, UpdateDemand};
pub use internal_order::{CreateInternalOrder, InternalOrder, UpdateInternalOrder};
pub use invoice_in::{CreateInvoiceIn, InvoiceIn, UpdateInvoiceIn};
pub use move_document::{CreateMove, Move, UpdateMove};
pub use organization::{CompanyType, CreateOrganization, Organization, UpdateOrganization};
pub use product::{CreateProduct, Product, UpdateProduct};
pub use product_folder::{CreateProductFolder, ProductFolder, UpdateProductFolder};
pub use purchase_order::{CreatePurchaseOrder, PurchaseOrder, UpdatePurchaseOrder};
pub use store::{CreateStore, Store, UpdateStore};
pub use supply::{CreateSupply, Supply, UpdateSupply};
pub use webhook::{CreateWebhook, DiffType, UpdateWebhook, Webhook, WebhookAction};
