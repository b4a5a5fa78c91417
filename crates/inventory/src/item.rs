use serde::{Deserialize, Serialize};

use questbag_core::{Entity, ItemId};

use crate::category::Category;

/// A quantity of one item, tracked by the inventory.
///
/// Only the quantity changes once the record is created; name, id and
/// category are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    id: ItemId,
    name: String,
    category: Category,
    quantity: i64,
}

impl ItemRecord {
    pub fn new(id: ItemId, name: impl Into<String>, category: Category, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            quantity,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Merge an incoming quantity into this record, saturating at the i64 bounds.
    pub(crate) fn absorb(&mut self, quantity: i64) -> i64 {
        self.quantity = self.quantity.saturating_add(quantity);
        self.quantity
    }
}

impl Entity for ItemRecord {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_adds_and_saturates() {
        let mut potion = ItemRecord::new(ItemId::new(3), "Health Potion", Category::Generic, 5);
        assert_eq!(potion.absorb(-7), -2);
        assert_eq!(potion.absorb(i64::MAX), i64::MAX - 2);
        assert_eq!(potion.absorb(10), i64::MAX);
    }

    #[test]
    fn entity_id_matches_typed_id() {
        let sword = ItemRecord::new(ItemId::new(1), "Sword", Category::Weapon, 1);
        assert_eq!(*Entity::id(&sword), sword.id_typed());
    }
}
