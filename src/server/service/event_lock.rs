//! Per-event mutual exclusion for capacity ledger updates.
//!
//! Every read-modify-write of an event's confirmed counter happens while holding that
//! event's lock, and the database transaction is opened only after the lock is taken.
//! Requests for different events never wait on each other.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex as SyncMutex, PoisonError},
};
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = HashMap<i32, Arc<Mutex<()>>>;

/// Map of event ID to a mutex guarding that event's ledger.
///
/// Cloning is cheap and clones share the same map, so one instance lives in `AppState`
/// and is handed to services by reference. An entry only lives while some task holds
/// or waits for it; the last guard to be released removes it, so the map is bounded
/// by the number of events being worked on concurrently.
#[derive(Clone, Default)]
pub struct EventLocks {
    locks: Arc<SyncMutex<LockMap>>,
}

/// Exclusive access to one event's ledger, released on drop.
pub struct EventLockGuard {
    event_id: i32,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<SyncMutex<LockMap>>,
}

impl EventLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to an event's ledger.
    ///
    /// The returned guard owns its mutex, so it can be held across awaits and is
    /// released when dropped.
    ///
    /// # Arguments
    /// - `event_id` - Event whose ledger is about to be read and written
    pub async fn acquire(&self, event_id: i32) -> EventLockGuard {
        let lock = self.get_lock(event_id);

        EventLockGuard {
            event_id,
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
        }
    }

    /// Number of events that currently have a lock entry.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_lock(&self, event_id: i32) -> Arc<Mutex<()>> {
        self.map()
            .entry(event_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, LockMap> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for EventLockGuard {
    fn drop(&mut self) {
        // Release the mutex first so its Arc no longer counts as a holder.
        self.guard.take();

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);

        // Clones are only handed out under the map lock, so a count of one means
        // nobody holds or waits for this event.
        if locks
            .get(&self.event_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.event_id);
        }
    }
}
