//! In-memory entry store.

use std::sync::{PoisonError, RwLock};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Entry;

use super::EntryStore;

/// Keeps entries in a vector behind a lock. Used by tests and benchmarks.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> TrackerError {
    TrackerError::StorageError {
        path: "<memory>".to_string(),
        message: "entry lock poisoned".to_string(),
    }
}

impl EntryStore for InMemoryEntryStore {
    fn list(&self) -> TrackerResult<Vec<Entry>> {
        Ok(self.entries.read().map_err(poisoned)?.clone())
    }

    fn append(&self, entry: Entry) -> TrackerResult<Vec<Entry>> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.push(entry);
        Ok(entries.clone())
    }

    fn replace(&self, index: usize, entry: Entry) -> TrackerResult<Vec<Entry>> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let len = entries.len();
        let slot = entries
            .get_mut(index)
            .ok_or(TrackerError::InvalidIndex { index, len })?;
        *slot = entry;
        Ok(entries.clone())
    }

    fn remove(&self, index: usize) -> TrackerResult<Vec<Entry>> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if index >= entries.len() {
            return Err(TrackerError::InvalidIndex {
                index,
                len: entries.len(),
            });
        }
        entries.remove(index);
        Ok(entries.clone())
    }
}
