//! Router Boundary
//!
//! The core does not own route matching; it only consumes the current
//! route path and "navigation occurred" events from the routing
//! collaborator. Subscriptions are explicit and carry a cleanup contract:
//! dropping the returned guard unsubscribes.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Fan-out for navigation events.
///
/// Dispatch is synchronous and in subscription order; the event source is
/// the single event-processing path, so listeners never run concurrently.
#[derive(Clone, Default)]
pub struct RouteEvents {
    inner: Arc<RwLock<Registry>>,
}

impl RouteEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for navigation events.
    pub fn subscribe(&self, listener: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.inner.write();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(listener));
        Subscription {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Notify listeners that navigation to `path` has completed.
    pub fn navigated(&self, path: &str) {
        // Snapshot first so a listener may subscribe or unsubscribe
        // without deadlocking the registry.
        let listeners: Vec<Listener> = self.inner.read().listeners.values().cloned().collect();
        for listener in listeners {
            listener(path);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.read().listeners.len()
    }
}

/// Subscription guard; unsubscribes on drop.
pub struct Subscription {
    registry: Weak<RwLock<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.write().listeners.remove(&self.id);
        }
    }
}
