use std::sync::{Arc, RwLock};

use super::item_store::{ItemStore, Revision};
use super::StorageError;
use crate::item::Item;

/// In-memory item store backed by `Arc<RwLock<..>>`.
///
/// Clone-friendly (cloning shares the same underlying collection), so a
/// test can keep a handle and write "behind the back" of a `Catalog`.
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    inner: Arc<RwLock<Document>>,
}

#[derive(Default)]
struct Document {
    items: Vec<Item>,
    saves: u64,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Document { items, saves: 0 })),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn load(&self) -> Result<Vec<Item>, StorageError> {
        let doc = self
            .inner
            .read()
            .map_err(|_| StorageError::LockPoisoned("item load"))?;
        Ok(doc.items.clone())
    }

    fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        let mut doc = self
            .inner
            .write()
            .map_err(|_| StorageError::LockPoisoned("item save"))?;
        doc.items = items.to_vec();
        doc.saves += 1;
        Ok(())
    }

    fn revision(&self) -> Result<Revision, StorageError> {
        let doc = self
            .inner
            .read()
            .map_err(|_| StorageError::LockPoisoned("item revision"))?;
        Ok(Revision::Counter(doc.saves))
    }
}
