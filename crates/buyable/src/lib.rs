//! Buyable schema extension.
//!
//! Content objects become buyable by carrying three extra fields: a buyable
//! flag, a unit price and a VAT rate. Fields are plain descriptors plus an
//! extension marker; contributing them to a schema is registration, not
//! subclassing.

pub mod access;
pub mod data;
pub mod extension;
pub mod field;

pub use access::{FieldAccess, FieldValue, field_value};
pub use data::FieldBackedItemData;
pub use extension::{SchemaExtension, buyable_extension, reorder_schemata};
pub use field::{FieldDescriptor, FieldKind, SHOP_SCHEMATA, VAT_VOCABULARY, buyable_fields};
