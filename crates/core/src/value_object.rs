//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new value. `Money` is the canonical example in this
/// workspace: two amounts of `"9.99"` are the same value regardless of where
/// they came from.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
