//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own. Two values with the same
/// attributes are interchangeable, e.g. two `Category::Weapon` tags.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: a category tag, a rendered listing line
/// - **Entity**: an item record, identified by its `ItemId`
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
