//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are immutable once built. To "modify" one, build a
/// new value.
///
/// - **Value Object**: `Money::from_cents(299_999)` equals any other
///   `Money::from_cents(299_999)`.
/// - **Entity**: a `Product` is identified by its `ProductId`.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied
/// freely, compared by attributes, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
