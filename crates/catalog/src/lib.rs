//! Catalog and item-data collaborator seams.
//!
//! The shop does not own content: items live in an external catalog and are
//! resolved per request. This crate defines the lookup and item-data traits
//! plus an in-memory implementation for tests and embedding.

pub mod item;
pub mod memory;

pub use item::{Catalog, CatalogItem, ItemData, ItemPricing, StockDescriptor};
pub use memory::{BuyableRecord, InMemoryCatalog};
