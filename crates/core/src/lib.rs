//! `shoplite-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use money::{Money, VatRate};
pub use value_object::ValueObject;
