//! Item - the catalog record.
//!
//! An `Item` is what lives in the document: an integer id, a name, a
//! category and an optional price. `NewItem` is the validated shape of a
//! creation request before an id has been assigned.
//!
//! ## Example
//!
//! ```
//! use item_catalog::{Item, NewItem};
//!
//! let new_item = NewItem::new("Laptop Pro", "Electronics", Some(2499.0));
//! let item = new_item.into_item(42);
//! assert_eq!(item.id, 42);
//!
//! let json = serde_json::to_value(&item).unwrap();
//! assert_eq!(json["price"], 2499.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an item. Assigned by the service, never by the client.
pub type ItemId = u64;

/// A catalog record as stored in the document.
///
/// `price` is `None` when the item was created without one. It serializes
/// as `null` and is never coerced to zero.
///
/// Fields this crate does not know about, e.g. added to the document by
/// another tool, are kept in `extra` and written back on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Case-insensitive substring match against the item name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// A validated creation request, not yet assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
}

impl NewItem {
    /// Build a new item, trimming `name` and `category`.
    pub fn new(name: impl AsRef<str>, category: impl AsRef<str>, price: Option<f64>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            category: category.as_ref().trim().to_string(),
            price,
        }
    }

    /// Attach an id, producing the record that gets persisted.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            extra: Map::new(),
        }
    }
}
