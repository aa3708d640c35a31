//! Schema extension registration and ordering.

use serde::{Deserialize, Serialize};

use crate::field::{FieldDescriptor, buyable_fields};

/// A named set of fields contributed to a content schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaExtension {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaExtension {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// The shop's buyable extension.
pub fn buyable_extension() -> SchemaExtension {
    SchemaExtension::new("buyable", buyable_fields())
}

/// Schemata display order once an extension contributed its tab: the newest
/// (last) schemata moves to position 1, the rest keep their order.
pub fn reorder_schemata<T: Clone>(original: &[T]) -> Vec<T> {
    let mut schemata = original.to_vec();
    let Some(last) = schemata.pop() else {
        return schemata;
    };
    if schemata.is_empty() {
        return vec![last];
    }
    schemata.insert(1, last);
    schemata
}
