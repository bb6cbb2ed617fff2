//! Item service - validation, identity and persistence of new items.

use serde_json::Value;
use tracing::info;

use super::ids::IdSequence;
use super::input::validate;
use crate::bus::{ChangeBus, StoreEvent};
use crate::error::CatalogError;
use crate::item::{Item, ItemId};
use crate::store::ItemStore;

/// Creates and looks up items on top of an `ItemStore`.
///
/// Every creation is one full read and one full rewrite of the document,
/// followed by an `ItemCreated` event on the change bus.
pub struct ItemService<S> {
    store: S,
    ids: IdSequence,
    bus: ChangeBus,
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: S, bus: ChangeBus) -> Self {
        Self::with_ids(store, bus, IdSequence::new())
    }

    /// Create a service with a specific id sequence.
    pub fn with_ids(store: S, bus: ChangeBus, ids: IdSequence) -> Self {
        Self { store, ids, bus }
    }

    /// Validate `input`, assign an id, append and persist.
    ///
    /// Nothing is read or written when validation fails.
    pub fn create(&self, input: &Value) -> Result<Item, CatalogError> {
        let new_item = validate(input)?;

        let mut items = self.store.load()?;
        let floor = items.iter().map(|item| item.id).max().unwrap_or(0);
        let item = new_item.into_item(self.ids.next_id(floor));
        items.push(item.clone());
        self.store.save(&items)?;

        info!(id = item.id, name = %item.name, total = items.len(), "item created");
        self.bus.publish(&StoreEvent::ItemCreated {
            id: item.id,
            total: items.len(),
        });
        Ok(item)
    }

    /// Look up a single item.
    pub fn get(&self, id: ItemId) -> Result<Item, CatalogError> {
        self.store.find(id)?.ok_or(CatalogError::NotFound(id))
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
