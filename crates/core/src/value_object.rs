//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attribute values
/// are interchangeable. A `StaffRole { role: "Manager", .. }` is a value object,
/// a `Staff { id: "M001", .. }` is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(4), Seats(4));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
