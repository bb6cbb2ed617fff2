//! ItemStore - whole-collection persistence for items.

use std::time::SystemTime;

use super::StorageError;
use crate::item::{Item, ItemId};

/// Fingerprint of the document state.
///
/// Two equal revisions mean no change was detected between the reads.
/// Used by the stats cache to notice writers that bypass this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// The document does not exist yet.
    Missing,
    /// File-backed document: modification time and length.
    File { modified: SystemTime, len: u64 },
    /// In-memory document: number of saves so far.
    Counter(u64),
}

/// Whole-collection storage for items.
///
/// Every read returns the full collection in document order and every
/// write replaces it. Callers never see partial updates, and there is no
/// locking across a load/save pair: concurrent read-modify-write cycles
/// can lose a write.
pub trait ItemStore: Send + Sync {
    /// Load the full collection, initializing an empty document if none exists.
    fn load(&self) -> Result<Vec<Item>, StorageError>;

    /// Replace the full collection.
    fn save(&self, items: &[Item]) -> Result<(), StorageError>;

    /// Current fingerprint of the document.
    fn revision(&self) -> Result<Revision, StorageError>;

    /// Find a single item by id. Linear scan over a fresh load.
    fn find(&self, id: ItemId) -> Result<Option<Item>, StorageError> {
        Ok(self.load()?.into_iter().find(|item| item.id == id))
    }
}
