//! Field-value access on content objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{DomainError, DomainResult};

/// A value stored in a schema field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    Bool(bool),
    Number(Decimal),
    Text(String),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Content objects that expose schema fields by name.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Read a field from a content object.
///
/// A missing accessor surfaces as [`DomainError::AttributeNotFound`] so the
/// caller decides; it is never swallowed here.
pub fn field_value(content: &dyn FieldAccess, name: &str) -> DomainResult<FieldValue> {
    content
        .field(name)
        .ok_or_else(|| DomainError::attribute_not_found(name))
}
