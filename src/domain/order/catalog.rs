use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::value_objects::ItemId;

// ============================================================================
// Menu Catalog
// ============================================================================
//
// Read-only name/price data for menu items, keyed by item id. Built once by
// the binding layer and handed to `review_order` by reference.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Stand-in used when an item id has no catalog entry.
    pub fn placeholder(item_id: ItemId) -> Self {
        Self {
            name: format!("Item {}", item_id),
            price: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<ItemId, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless the id is already present. Returns whether the
    /// entry was stored; the first entry for an id wins.
    pub fn insert(&mut self, item_id: ItemId, entry: CatalogEntry) -> bool {
        if self.entries.contains_key(&item_id) {
            return false;
        }
        self.entries.insert(item_id, entry);
        true
    }

    pub fn get(&self, item_id: ItemId) -> Option<&CatalogEntry> {
        self.entries.get(&item_id)
    }

    /// Entry for `item_id`, falling back to the `Item <id>` placeholder.
    pub fn lookup(&self, item_id: ItemId) -> CatalogEntry {
        match self.get(item_id) {
            Some(entry) => entry.clone(),
            None => {
                tracing::debug!(item_id = %item_id, "No catalog entry, using placeholder");
                CatalogEntry::placeholder(item_id)
            }
        }
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.entries.contains_key(&item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ItemId, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (ItemId, CatalogEntry)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (item_id, entry) in iter {
            catalog.insert(item_id, entry);
        }
        catalog
    }
}
