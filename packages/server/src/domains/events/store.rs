//! In-memory event store, one collection per marketplace.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Event;

/// Latest ingested events per marketplace.
///
/// Writers (`reset`, `append`) take the write lock for a single in-place
/// mutation, so a reader sees a batch either fully applied or not at all.
/// Nothing is persisted; the store lives as long as its owner.
#[derive(Debug, Default)]
pub struct EventStore {
    data: RwLock<HashMap<String, Vec<Event>>>,
}

impl EventStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic elsewhere cannot leave a Vec half-extended, so a poisoned lock
    // still guards consistent data.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Event>>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Event>>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the marketplace's collection with an empty one.
    pub fn reset(&self, marketplace: &str) {
        self.write_guard()
            .insert(marketplace.to_string(), Vec::new());
    }

    /// Append a batch to the marketplace's collection, creating it if needed.
    pub fn append(&self, marketplace: &str, events: Vec<Event>) {
        if events.is_empty() {
            return;
        }
        self.write_guard()
            .entry(marketplace.to_string())
            .or_default()
            .extend(events);
    }

    /// Snapshot of the marketplace's collection (empty if never ingested).
    pub fn read(&self, marketplace: &str) -> Vec<Event> {
        self.read_guard()
            .get(marketplace)
            .cloned()
            .unwrap_or_default()
    }

    /// Run `f` against the collection under the read lock, without cloning it.
    pub fn read_with<R>(&self, marketplace: &str, f: impl FnOnce(&[Event]) -> R) -> R {
        let data = self.read_guard();
        let events = data.get(marketplace).map(Vec::as_slice).unwrap_or_default();
        f(events)
    }

    /// Number of events held for a marketplace.
    pub fn len(&self, marketplace: &str) -> usize {
        self.read_guard().get(marketplace).map_or(0, Vec::len)
    }

    /// Known marketplaces with their event counts, sorted by identifier.
    pub fn marketplaces(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .read_guard()
            .iter()
            .map(|(market, events)| (market.clone(), events.len()))
            .collect();
        entries.sort();
        entries
    }
}
