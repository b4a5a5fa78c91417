use serde::{Deserialize, Serialize};

use questbag_core::{DomainError, DomainResult, ValueObject};

/// Item category. Decides which compartment a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapon,
    Armor,
    #[serde(rename = "item")]
    Generic,
}

impl ValueObject for Category {}

impl Category {
    /// Scan order used by id-only lookups (remove, update, find).
    pub const ALL: [Category; 3] = [Category::Weapon, Category::Armor, Category::Generic];

    /// Tag carried by an item of this category.
    pub fn kind_name(self) -> &'static str {
        match self {
            Category::Weapon => "weapon",
            Category::Armor => "armor",
            Category::Generic => "item",
        }
    }

    /// Name of the compartment holding this category.
    pub fn compartment_name(self) -> &'static str {
        match self {
            Category::Weapon => "weapons",
            Category::Armor => "armor",
            Category::Generic => "items",
        }
    }

    /// Parse an item tag (`weapon`, `armor`, `item`).
    pub fn parse_kind(kind: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.kind_name() == kind)
            .ok_or_else(|| DomainError::unknown_category(kind))
    }

    /// Parse a compartment name (`weapons`, `armor`, `items`).
    pub fn parse_compartment(name: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.compartment_name() == name)
            .ok_or_else(|| DomainError::unknown_category(name))
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Weapon => 0,
            Category::Armor => 1,
            Category::Generic => 2,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind_name())
    }
}
