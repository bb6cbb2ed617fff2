//! Change Bus - tells interested parties that the item document changed.
//!
//! The item service publishes a `StoreEvent` after every successful write.
//! Listeners (the stats cache) run synchronously inside `publish`, so an
//! invalidation is never reordered after a read that follows the write.
//!
//! ```text
//! ItemService::create ──save──▶ ItemStore
//!        │
//!        └──publish(ItemCreated)──▶ ChangeBus ──on_change──▶ StatsCache::invalidate
//! ```

mod publisher;

pub use publisher::{ChangeBus, ChangeListener, StoreEvent};
