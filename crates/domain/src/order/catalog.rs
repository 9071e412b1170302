//! Restaurant menu the order draws from.

use serde::{Deserialize, Serialize};

use super::{ItemId, Money};

/// A dish on the restaurant menu.
///
/// Catalog entries are read-only source data; adding one to an order
/// copies its fields into a new ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier for the dish.
    pub id: ItemId,

    /// Human-readable dish name.
    pub name: String,

    /// Current menu price per unit.
    pub unit_price: Money,

    /// Opaque image URI, never interpreted.
    pub image_ref: String,
}

impl MenuItem {
    /// Creates a new menu entry.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}

/// The menu of a single restaurant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from menu entries.
    pub fn new(entries: Vec<MenuItem>) -> Self {
        Self { entries }
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// All entries in menu order.
    pub fn entries(&self) -> &[MenuItem] {
        &self.entries
    }

    /// Number of entries on the menu.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the menu is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
