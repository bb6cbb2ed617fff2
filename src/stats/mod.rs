//! Stats Cache - cached count and average price over the collection.
//!
//! ```text
//! EMPTY ──get──▶ COMPUTED ──invalidate / revision changed──▶ EMPTY ──get──▶ ...
//! ```
//!
//! The snapshot is never refreshed on a timer: two reads with no write in
//! between return the same `cachedAt`.

mod cache;
mod snapshot;

pub use cache::StatsCache;
pub use snapshot::StatsSnapshot;
