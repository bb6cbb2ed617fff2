//! item_catalog: a JSON-file-backed item catalog.
//!
//! Items (name, category, optional price) live in one JSON document. The
//! crate provides name search with pagination, single-item lookup,
//! validated creation, and a cached count/average-price snapshot that is
//! invalidated whenever the document changes. The `http` feature (on by
//! default) exposes all of it through an axum router.
//!
//! ## Quick Start
//!
//! ```
//! use item_catalog::{Catalog, InMemoryItemStore, ItemQuery};
//! use serde_json::json;
//!
//! let catalog = Catalog::new(InMemoryItemStore::new());
//! catalog.create(&json!({ "name": "Item 1", "category": "Books", "price": 10 })).unwrap();
//! catalog.create(&json!({ "name": "Item 2", "category": "Books" })).unwrap();
//!
//! let page = catalog.query(&ItemQuery::all().search("item").paginate(1, 1)).unwrap();
//! assert_eq!(page.total, 2);
//! assert_eq!(page.items.len(), 1);
//!
//! let stats = catalog.stats().unwrap();
//! assert_eq!(stats.average_price, 5.0);
//! ```

pub mod bus;
mod catalog;
mod config;
mod error;
mod item;
pub mod query;
pub mod service;
pub mod stats;
mod store;
mod telemetry;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::Catalog;
pub use config::{CatalogConfig, ConfigError};
pub use error::CatalogError;
pub use item::{Item, ItemId, NewItem};
pub use query::{ItemQuery, ListParams, QueryPage};
pub use service::ValidationError;
pub use stats::{StatsCache, StatsSnapshot};
pub use store::{InMemoryItemStore, ItemStore, JsonFileStore, Revision, StorageError};
pub use telemetry::init_tracing;
