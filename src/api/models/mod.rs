//! Data types shared by all entities.
//!
//! - [`Meta`], [`EntityRef`]: entity identity and references
//! - [`ListResponse`]: paged collections
//! - [`Moment`]: MoySklad timestamps
//! - Prices, barcodes, rates and document positions

mod common;
mod meta;
mod moment;

pub use common::{Barcode, DocumentPosition, PositionInput, Price, PriceType, Rate, SalePrice};
pub use meta::{EntityRef, ListResponse, Meta};
pub use moment::Moment;
