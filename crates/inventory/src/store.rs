use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use questbag_core::{DomainError, DomainResult, Entity, ItemId};

use crate::category::Category;
use crate::item::ItemRecord;
use crate::listing::Listing;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Maximum number of entries across all compartments.
    pub max_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { max_capacity: 10 }
    }
}

/// What a successful `add` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The id was new to its compartment and the record was stored.
    Inserted,
    /// The id already existed; `quantity` is the stored total after merging.
    Merged { quantity: i64 },
}

/// Capacity-limited item store with one compartment per [`Category`].
///
/// Compartments keep insertion order. Ids are unique within a compartment,
/// but the same id may exist in several compartments at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    max_capacity: usize,
    compartments: [Vec<ItemRecord>; 3],
}

impl Inventory {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            compartments: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(config.max_capacity)
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Total entries across all compartments.
    pub fn len(&self) -> usize {
        self.compartments.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full once total entries reach `max_capacity`.
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.max_capacity.saturating_sub(self.len())
    }

    /// Entries of one category, in insertion order.
    pub fn compartment(&self, category: Category) -> &[ItemRecord] {
        &self.compartments[category.index()]
    }

    pub fn get(&self, category: Category, id: ItemId) -> Option<&ItemRecord> {
        self.compartment(category).iter().find(|r| *r.id() == id)
    }

    /// First record with `id`, scanning weapons, then armor, then items.
    pub fn find(&self, id: ItemId) -> Option<&ItemRecord> {
        Category::ALL.into_iter().find_map(|c| self.get(c, id))
    }

    /// Add a record, merging its quantity into an existing entry with the same id.
    ///
    /// A full inventory rejects every add, including merges into an existing
    /// entry that would not take a new slot.
    pub fn add(&mut self, item: ItemRecord) -> DomainResult<AddOutcome> {
        self.ensure_not_full(item.name())?;

        let id = item.id_typed();
        let category = item.category();
        let compartment = &mut self.compartments[category.index()];

        match compartment.iter_mut().find(|r| *r.id() == id) {
            Some(existing) => {
                let quantity = existing.absorb(item.quantity());
                debug!(%id, %category, quantity, "merged item quantity");
                Ok(AddOutcome::Merged { quantity })
            }
            None => {
                debug!(%id, %category, name = item.name(), "inserted item");
                compartment.push(item);
                Ok(AddOutcome::Inserted)
            }
        }
    }

    /// Add a record described by an untyped kind tag (`weapon`, `armor`, `item`).
    ///
    /// Capacity is checked before the tag, so a full inventory reports
    /// `CapacityExceeded` even for an unknown tag.
    pub fn add_tagged(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        kind: &str,
        quantity: i64,
    ) -> DomainResult<AddOutcome> {
        let name = name.into();
        self.ensure_not_full(&name)?;

        let category = Category::parse_kind(kind).inspect_err(|_| {
            warn!(kind, name = %name, "rejected item with unknown category");
        })?;

        self.add(ItemRecord::new(id, name, category, quantity))
    }

    /// Remove the first record with `id` (weapons, then armor, then items).
    ///
    /// Records with the same id in later compartments are left in place.
    pub fn remove_by_id(&mut self, id: ItemId) -> DomainResult<ItemRecord> {
        let (category, pos) = self.locate(id).ok_or_else(|| {
            debug!(%id, "remove: no such item");
            DomainError::not_found(id)
        })?;

        let removed = self.compartments[category.index()].remove(pos);
        debug!(%id, %category, "removed item");
        Ok(removed)
    }

    /// Overwrite the quantity of the first record with `id`, returning the old value.
    ///
    /// Any integer is accepted, including zero and negative quantities.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> DomainResult<i64> {
        let (category, pos) = self.locate(id).ok_or_else(|| {
            debug!(%id, "update: no such item");
            DomainError::not_found(id)
        })?;

        let record = &mut self.compartments[category.index()][pos];
        let previous = record.quantity();
        record.set_quantity(new_quantity);
        debug!(%id, %category, previous, quantity = new_quantity, "updated item quantity");
        Ok(previous)
    }

    /// List a compartment by name (`weapons`, `armor`, `items`).
    pub fn list_category(&self, name: &str) -> DomainResult<Listing> {
        let category = Category::parse_compartment(name).inspect_err(|_| {
            warn!(compartment = name, "invalid compartment");
        })?;
        Ok(Listing::from_records(category, self.compartment(category)))
    }

    fn ensure_not_full(&self, name: &str) -> DomainResult<()> {
        if self.is_full() {
            warn!(name, capacity = self.max_capacity, "inventory is full");
            return Err(DomainError::capacity_exceeded(name, self.max_capacity));
        }
        Ok(())
    }

    fn locate(&self, id: ItemId) -> Option<(Category, usize)> {
        Category::ALL.into_iter().find_map(|c| {
            self.compartment(c)
                .iter()
                .position(|r| *r.id() == id)
                .map(|pos| (c, pos))
        })
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}
