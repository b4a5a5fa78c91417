//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every rejection leaves the inventory untouched; callers branch on the
/// variant instead of re-querying state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An add was attempted while the inventory held `capacity` or more entries.
    #[error("inventory is full (capacity {capacity}), cannot add {name}")]
    CapacityExceeded { name: String, capacity: usize },

    /// A category tag or compartment name outside the known set.
    #[error("invalid compartment: {0}")]
    UnknownCategory(String),

    /// No compartment holds the requested identifier.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn capacity_exceeded(name: impl Into<String>, capacity: usize) -> Self {
        Self::CapacityExceeded {
            name: name.into(),
            capacity,
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
