//! Inventory domain module.
//!
//! A capacity-limited store of item records split into one compartment per
//! category. Pure in-memory logic: no IO, no storage.

pub mod category;
pub mod item;
pub mod listing;
pub mod store;

pub use category::Category;
pub use item::ItemRecord;
pub use listing::{Listing, ListingLine};
pub use store::{AddOutcome, Inventory, InventoryConfig};

pub use questbag_core::{DomainError, DomainResult, ItemId};
