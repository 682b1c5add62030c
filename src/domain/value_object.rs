//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Implementors carry no identity and expose no mutation; two instances with
/// equal fields are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
