//! Entry persistence.
//!
//! Entries live in a single ordered collection addressed by position. The
//! [`EntryStore`] trait abstracts the backend so the API can run against the
//! CSV file in production and an in-memory list in tests.
//!
//! Writes are last-write-wins: a store serializes mutations made through
//! itself, but nothing coordinates separate processes editing the same file.

mod csv_store;
mod memory;

pub use csv_store::{CsvEntryStore, ENTRY_COLUMNS};
pub use memory::InMemoryEntryStore;

use crate::error::TrackerResult;
use crate::models::Entry;

/// Storage operations over the ordered entry collection.
///
/// Every mutation returns the full collection as it stands after the write.
pub trait EntryStore: Send + Sync {
    /// Returns all entries in stored order.
    fn list(&self) -> TrackerResult<Vec<Entry>>;

    /// Appends an entry at the end of the collection.
    fn append(&self, entry: Entry) -> TrackerResult<Vec<Entry>>;

    /// Replaces the entry at `index`.
    ///
    /// Fails with `InvalidIndex` when `index` is out of range.
    fn replace(&self, index: usize, entry: Entry) -> TrackerResult<Vec<Entry>>;

    /// Removes the entry at `index`, shifting later entries down.
    ///
    /// Fails with `InvalidIndex` when `index` is out of range.
    fn remove(&self, index: usize) -> TrackerResult<Vec<Entry>>;
}
