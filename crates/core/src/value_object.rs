//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are the same value. To "modify" one, construct a
/// new one (which re-runs its validation). `ItemName` and `Quantity` in the
/// inventory crate are the value objects of this domain.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
