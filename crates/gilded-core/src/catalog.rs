//! # Catalog
//!
//! The inn's inventory. The catalog is the only owner of [`Item`] values;
//! everything else (carts, reports) refers to items by [`ItemId`].
//!
//! ## Operations
//! ```text
//! add_item(item)    ──► push to the end, no dedup, returns item.id
//! remove_item(id)   ──► drop every entry with that id, survivors keep order
//! items()           ──► read-only slice in insertion order
//! update_quality()  ──► one night for every item, in insertion order
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Item, ItemId};

/// An insertion-ordered collection of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Appends an item and returns its id.
    ///
    /// Adding a clone of an item already present creates a second entry with
    /// the same id; [`Catalog::remove_item`] then drops both.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Removes every entry with the given id. Unknown ids are ignored.
    ///
    /// Returns the number of entries removed.
    pub fn remove_item(&mut self, id: ItemId) -> usize {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        initial_len - self.items.len()
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up the first entry with the given id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: ItemId) -> CoreResult<&Item> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// Looks up an item by display name (first match).
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advances every item by one day.
    pub fn update_quality(&mut self) {
        for item in &mut self.items {
            item.update_quality();
        }
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Catalog {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
