//! Item Service - validates creation requests and assigns identity.
//!
//! ## Quick Start
//!
//! ```
//! use item_catalog::bus::ChangeBus;
//! use item_catalog::service::ItemService;
//! use item_catalog::InMemoryItemStore;
//! use serde_json::json;
//!
//! let service = ItemService::new(InMemoryItemStore::new(), ChangeBus::new());
//! let item = service
//!     .create(&json!({ "name": "Desk Lamp", "category": "Lighting", "price": 39.9 }))
//!     .unwrap();
//! assert_eq!(service.get(item.id).unwrap().name, "Desk Lamp");
//! ```

mod error;
mod ids;
mod input;
mod item_service;

pub use error::ValidationError;
pub use ids::IdSequence;
pub use input::validate;
pub use item_service::ItemService;
