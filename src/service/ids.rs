use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::item::ItemId;

/// Issues item ids that are time-ordered and never repeat.
///
/// Each id is the largest of: the current time in milliseconds, one more
/// than the last id issued, and one more than the caller-supplied floor
/// (the highest id already in the document). Two creations in the same
/// millisecond therefore get distinct ids.
#[derive(Debug)]
pub struct IdSequence {
    last: AtomicU64,
    clock: fn() -> u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Use a custom millisecond clock (tests).
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: AtomicU64::new(0),
            clock,
        }
    }

    /// Next id strictly greater than `floor` and than any id issued before.
    pub fn next_id(&self, floor: ItemId) -> ItemId {
        let now = (self.clock)();
        let step = |last: u64| {
            now.max(last.saturating_add(1))
                .max(floor.saturating_add(1))
        };
        // the closure always returns Some, so the Err arm is unreachable
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
            .unwrap_or_else(|last| last);
        step(previous)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
