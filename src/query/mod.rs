//! Query Engine - name search and pagination over a loaded collection.
//!
//! Filtering always happens before pagination, so `total` in the result is
//! the number of matching items rather than the size of the collection.
//!
//! ## Example
//!
//! ```
//! use item_catalog::query::{self, ItemQuery, ListParams};
//! use item_catalog::NewItem;
//!
//! let items = vec![
//!     NewItem::new("Laptop Pro", "Electronics", Some(2499.0)).into_item(1),
//!     NewItem::new("Standing Desk", "Furniture", None).into_item(2),
//! ];
//!
//! let params = ListParams {
//!     q: Some("pro".into()),
//!     page: Some("1".into()),
//!     limit: Some("10".into()),
//! };
//! let page = query::run(items, &ItemQuery::from_params(&params));
//! assert_eq!(page.total, 1);
//! assert_eq!(page.items[0].name, "Laptop Pro");
//! ```

mod engine;
mod params;

pub use engine::{run, QueryPage};
pub use params::{ItemQuery, ListParams, Pagination};
