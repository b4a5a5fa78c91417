//! Read-only report over one compartment.

use serde::Serialize;

use questbag_core::{ItemId, ValueObject};

use crate::category::Category;
use crate::item::ItemRecord;

/// One rendered entry of a [`Listing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
}

impl ValueObject for ListingLine {}

impl core::fmt::Display for ListingLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (ID: {}) - Quantity: {}", self.name, self.id, self.quantity)
    }
}

/// Snapshot of a compartment's entries, in insertion order.
///
/// `Display` renders the header line followed by one line per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub category: Category,
    pub lines: Vec<ListingLine>,
}

impl Listing {
    pub(crate) fn from_records<'a>(
        category: Category,
        records: impl IntoIterator<Item = &'a ItemRecord>,
    ) -> Self {
        let lines = records
            .into_iter()
            .map(|r| ListingLine {
                id: r.id_typed(),
                name: r.name().to_string(),
                quantity: r.quantity(),
            })
            .collect();
        Self { category, lines }
    }

    /// Header text, e.g. `Weapons:`.
    pub fn header(&self) -> String {
        let name = self.category.compartment_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{}:", first.to_uppercase(), chars.as_str()),
            None => ":".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl core::fmt::Display for Listing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
