//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attribute values are equal. `Money` is the canonical example:
/// 1.00 is 1.00, no matter where it came from. "Modifying" a value object
/// means constructing a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
