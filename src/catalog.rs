//! Catalog - the service façade the transport talks to.
//!
//! A `Catalog<S>` owns the item store, the item service, the stats cache and
//! the change bus that connects the write path to the cache. It is
//! `Send + Sync`; share it behind an `Arc`.
//!
//! ## Example
//!
//! ```
//! use item_catalog::{Catalog, InMemoryItemStore, ListParams};
//! use serde_json::json;
//!
//! let catalog = Catalog::new(InMemoryItemStore::new());
//! let created = catalog
//!     .create(&json!({ "name": "Laptop Pro", "category": "Electronics", "price": 2499 }))
//!     .unwrap();
//!
//! let page = catalog.list(&ListParams { q: Some("laptop".into()), ..Default::default() }).unwrap();
//! assert_eq!(page.items, vec![created]);
//! assert_eq!(catalog.stats().unwrap().total, 1);
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::bus::ChangeBus;
use crate::error::CatalogError;
use crate::item::{Item, ItemId};
use crate::query::{self, ItemQuery, ListParams, QueryPage};
use crate::service::{IdSequence, ItemService};
use crate::stats::{StatsCache, StatsSnapshot};
use crate::store::ItemStore;

pub struct Catalog<S> {
    service: ItemService<S>,
    stats: Arc<StatsCache>,
    bus: ChangeBus,
}

impl<S: ItemStore> Catalog<S> {
    /// Create a catalog over `store`, with the stats cache subscribed to
    /// the write path.
    pub fn new(store: S) -> Self {
        Self::with_ids(store, IdSequence::new())
    }

    /// Create a catalog with a specific id sequence.
    pub fn with_ids(store: S, ids: IdSequence) -> Self {
        let bus = ChangeBus::new();
        let stats = Arc::new(StatsCache::new());
        bus.subscribe(stats.clone());
        Self {
            service: ItemService::with_ids(store, bus.clone(), ids),
            stats,
            bus,
        }
    }

    /// List items matching raw query-string parameters.
    pub fn list(&self, params: &ListParams) -> Result<QueryPage, CatalogError> {
        self.query(&ItemQuery::from_params(params))
    }

    /// List items matching a parsed query. Re-reads the document.
    pub fn query(&self, query: &ItemQuery) -> Result<QueryPage, CatalogError> {
        let items = self.service.store().load()?;
        let page = query::run(items, query);
        debug!(
            search = query.search_term(),
            total = page.total,
            returned = page.items.len(),
            "listed items"
        );
        Ok(page)
    }

    /// Look up one item.
    pub fn get(&self, id: ItemId) -> Result<Item, CatalogError> {
        self.service.get(id)
    }

    /// Validate and create an item from a raw JSON body.
    pub fn create(&self, input: &Value) -> Result<Item, CatalogError> {
        self.service.create(input)
    }

    /// Current statistics, cached until the document changes.
    pub fn stats(&self) -> Result<StatsSnapshot, CatalogError> {
        Ok(self.stats.get(self.service.store())?)
    }

    /// The stats cache, for explicit invalidation or inspection.
    pub fn stats_cache(&self) -> &StatsCache {
        &self.stats
    }

    /// The change bus; subscribe to observe writes.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        self.service.store()
    }
}
