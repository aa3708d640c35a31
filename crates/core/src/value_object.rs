//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values. `Money { amount: 100 }` equals any other `Money { amount: 100 }`;
/// there is no identity to distinguish them. To "modify" a value object,
/// create a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
