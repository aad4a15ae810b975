//! Observable shared state for presentation preferences.
//!
//! [`SharedCell`] is a value with subscribers: every `set` notifies them
//! with the new value. Clones share the same value and subscriber list.
//! [`SidebarPreference`] persists one such cell under
//! [`SIDEBAR_COLLAPSED_KEY`].

use std::sync::{Arc, Mutex, RwLock};

use crate::error::StoreError;
use crate::store::{KeyValueStore, LocalStore, SIDEBAR_COLLAPSED_KEY};

/// Handle returned by [`SharedCell::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

/// A shared value that notifies subscribers when it changes.
pub struct SharedCell<T> {
    value: Arc<RwLock<T>>,
    listeners: Arc<Mutex<Listeners<T>>>,
}

impl<T> Clone for SharedCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: Clone> SharedCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        {
            let mut guard = self
                .value
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = value.clone();
        }
        self.notify(&value);
    }

    /// Derive the next value from the current one, store it, notify, and
    /// return it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> T {
        let next = {
            let mut guard = self
                .value
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let next = f(&*guard);
            *guard = next.clone();
            next
        };
        self.notify(&next);
        next
    }

    /// Register `listener`; it runs on every subsequent change.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entries
            .len()
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly.
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }
}

/// The sidebar-collapsed flag, loaded from and written back to the store.
#[derive(Clone)]
pub struct SidebarPreference {
    cell: SharedCell<bool>,
}

impl SidebarPreference {
    /// Load the stored flag (default expanded).
    pub fn load<S: KeyValueStore>(store: &LocalStore<S>) -> Self {
        Self {
            cell: SharedCell::new(store.read(SIDEBAR_COLLAPSED_KEY, false)),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.cell.get()
    }

    /// The underlying cell, for subscribing.
    pub fn cell(&self) -> &SharedCell<bool> {
        &self.cell
    }

    /// Set, persist and broadcast the flag.
    pub fn set<S: KeyValueStore>(
        &self,
        store: &mut LocalStore<S>,
        collapsed: bool,
    ) -> Result<(), StoreError> {
        store.write(SIDEBAR_COLLAPSED_KEY, &collapsed)?;
        self.cell.set(collapsed);
        Ok(())
    }

    /// Flip, persist and broadcast the flag. Returns the new value.
    pub fn toggle<S: KeyValueStore>(&self, store: &mut LocalStore<S>) -> Result<bool, StoreError> {
        let next = !self.cell.get();
        self.set(store, next)?;
        Ok(next)
    }
}
