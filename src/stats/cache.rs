use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info};

use super::snapshot::StatsSnapshot;
use crate::bus::{ChangeListener, StoreEvent};
use crate::store::{ItemStore, Revision, StorageError};

/// Single-slot cache of the collection statistics.
///
/// States are `Empty` and `Computed`. `get` computes on `Empty`, and also
/// when the store's revision no longer matches the one seen at compute
/// time (a writer outside this process touched the document). `invalidate`
/// returns to `Empty`; the catalog wires it to the change bus.
///
/// A computation that overlaps an invalidation is returned to its caller
/// but not cached, so a stale snapshot never outlives the write that made
/// it stale.
#[derive(Debug, Default)]
pub struct StatsCache {
    slot: RwLock<Option<Cached>>,
    generation: AtomicU64,
}

#[derive(Debug, Clone)]
struct Cached {
    snapshot: StatsSnapshot,
    revision: Revision,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot, computing it from `store` if needed.
    ///
    /// A read failure is returned as is; there is no stale fallback.
    pub fn get<S: ItemStore + ?Sized>(&self, store: &S) -> Result<StatsSnapshot, StorageError> {
        let revision = store.revision()?;
        {
            let slot = self
                .slot
                .read()
                .map_err(|_| StorageError::LockPoisoned("stats read"))?;
            if let Some(cached) = slot.as_ref() {
                if cached.revision == revision {
                    return Ok(cached.snapshot.clone());
                }
                debug!("item document changed outside the write path");
            }
        }

        let generation = self.generation.load(Ordering::SeqCst);
        info!("computing stats");
        let items = store.load()?;
        // load initializes a missing document; fingerprint what it created
        let revision = match revision {
            Revision::Missing => store.revision()?,
            seen => seen,
        };
        let snapshot = StatsSnapshot::compute(&items, Utc::now());

        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::LockPoisoned("stats write"))?;
        if self.generation.load(Ordering::SeqCst) == generation {
            *slot = Some(Cached {
                snapshot: snapshot.clone(),
                revision,
            });
        }
        Ok(snapshot)
    }

    /// Discard the cached snapshot.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            info!("stats cache invalidated");
        }
    }

    /// Whether a snapshot is currently cached.
    pub fn is_cached(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

impl ChangeListener for StatsCache {
    fn on_change(&self, event: &StoreEvent) {
        debug!(event_type = event.event_type(), "stats cache received store event");
        self.invalidate();
    }
}
