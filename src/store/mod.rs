//! Item Store - loading and persisting the item collection.
//!
//! The collection is always read and written as a whole. `ItemStore` hides
//! that choice from callers so the flat JSON document can later be replaced
//! by an indexed store.
//!
//! ## Example
//!
//! ```no_run
//! use item_catalog::{ItemStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("data/items.json");
//! let items = store.load()?; // creates the file as `[]` if missing
//! store.save(&items)?;
//! # Ok::<(), item_catalog::StorageError>(())
//! ```

mod error;
mod in_memory;
mod item_store;
mod json_file;

pub use error::StorageError;
pub use in_memory::InMemoryItemStore;
pub use item_store::{ItemStore, Revision};
pub use json_file::JsonFileStore;
