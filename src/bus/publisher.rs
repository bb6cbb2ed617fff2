//! Change notifications from the write path.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::item::ItemId;

/// Something that happened to the item document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// An item was appended and the document rewritten.
    ItemCreated { id: ItemId, total: usize },
}

impl StoreEvent {
    /// Short event name, used in logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ItemCreated { .. } => "ItemCreated",
        }
    }
}

/// Receives store events synchronously, in publish order.
///
/// Implementations must not block: they run on the writer's call stack.
pub trait ChangeListener: Send + Sync {
    fn on_change(&self, event: &StoreEvent);
}

impl<F> ChangeListener for F
where
    F: Fn(&StoreEvent) + Send + Sync,
{
    fn on_change(&self, event: &StoreEvent) {
        self(event)
    }
}

/// In-process fan-out of store events to registered listeners.
///
/// `publish` returns only after every listener has run, so anything a
/// listener invalidates is already invalid when the writer returns to its
/// caller.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use item_catalog::bus::{ChangeBus, StoreEvent};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let bus = ChangeBus::new();
/// let counter = Arc::clone(&seen);
/// bus.subscribe(Arc::new(move |_: &StoreEvent| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// bus.publish(&StoreEvent::ItemCreated { id: 1, total: 1 });
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone, Default)]
pub struct ChangeBus {
    listeners: Arc<RwLock<Vec<Arc<dyn ChangeListener>>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for all future events.
    pub fn subscribe(&self, listener: Arc<dyn ChangeListener>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Deliver `event` to every listener before returning.
    ///
    /// Listeners run without the registry lock held, so one may subscribe
    /// further listeners; those receive events from the next publish on.
    pub fn publish(&self, event: &StoreEvent) {
        let listeners: Vec<Arc<dyn ChangeListener>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        trace!(
            event_type = event.event_type(),
            listeners = listeners.len(),
            "publishing store event"
        );
        for listener in listeners.iter() {
            listener.on_change(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
