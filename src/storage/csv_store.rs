//! CSV file entry store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use csv::{Reader, Writer};
use serde::Deserialize;
use tracing::{debug, info};

use crate::calculation::{WORK_DATE_FORMAT, parse_work_date};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Entry, EntryHours};

use super::EntryStore;

/// Header row of the entry file, in column order.
pub const ENTRY_COLUMNS: [&str; 5] = ["Task", "Description", "Date", "Hours", "Invoice"];

/// A raw CSV row. Missing columns read as empty strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EntryRow {
    #[serde(default)]
    task: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    hours: String,
    #[serde(default)]
    invoice: String,
}

impl EntryRow {
    /// Converts the row, where `line` is the 1-based line number in the file.
    fn into_entry(self, line: usize) -> TrackerResult<Entry> {
        let date = parse_work_date(&self.date).map_err(|e| match e {
            TrackerError::InvalidDate { value, message } => TrackerError::InvalidDate {
                value,
                message: format!("line {}: {}", line, message),
            },
            other => other,
        })?;

        Ok(Entry {
            task: self.task,
            description: self.description,
            date,
            hours: EntryHours::from_cell(&self.hours),
            invoice: Some(self.invoice).filter(|invoice| !invoice.is_empty()),
        })
    }
}

/// Stores entries in a CSV file with a `Task,Description,Date,Hours,Invoice`
/// header.
///
/// The file is created with only the header row the first time it is read.
/// Each mutation rewrites the whole file through a temporary sibling that is
/// renamed into place, so readers never see a half-written file. Reads take
/// the same lock as mutations, since the first read may create the file.
///
/// # Example
///
/// ```no_run
/// use invoice_tracker::storage::{CsvEntryStore, EntryStore};
///
/// let store = CsvEntryStore::new("./Tracker.csv");
/// let entries = store.list().unwrap();
/// println!("{} entries", entries.len());
/// ```
#[derive(Debug)]
pub struct CsvEntryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvEntryStore {
    /// Creates a store backed by the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl std::fmt::Display) -> TrackerError {
        TrackerError::StorageError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn lock(&self) -> TrackerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| self.storage_error("write lock poisoned"))
    }

    fn read_entries(&self) -> TrackerResult<Vec<Entry>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Entry file missing, creating it");
            self.write_entries(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = Reader::from_path(&self.path).map_err(|e| self.storage_error(e))?;

        let mut entries = Vec::new();
        for (i, result) in reader.deserialize::<EntryRow>().enumerate() {
            let row = result.map_err(|e| self.storage_error(e))?;
            // Line 1 is the header
            entries.push(row.into_entry(i + 2)?);
        }

        debug!(path = %self.path.display(), entries_count = entries.len(), "Read entries");
        Ok(entries)
    }

    fn write_entries(&self, entries: &[Entry]) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        let mut writer = Writer::from_path(&tmp_path).map_err(|e| self.storage_error(e))?;

        writer
            .write_record(ENTRY_COLUMNS)
            .map_err(|e| self.storage_error(e))?;

        for entry in entries {
            let date = entry.date.format(WORK_DATE_FORMAT).to_string();
            let hours = entry
                .hours
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            writer
                .write_record([
                    entry.task.as_str(),
                    entry.description.as_str(),
                    date.as_str(),
                    hours.as_str(),
                    entry.invoice.as_deref().unwrap_or(""),
                ])
                .map_err(|e| self.storage_error(e))?;
        }

        writer.flush().map_err(|e| self.storage_error(e))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.storage_error(e))?;

        debug!(path = %self.path.display(), entries_count = entries.len(), "Wrote entries");
        Ok(())
    }
}

impl EntryStore for CsvEntryStore {
    fn list(&self) -> TrackerResult<Vec<Entry>> {
        let _guard = self.lock()?;
        self.read_entries()
    }

    fn append(&self, entry: Entry) -> TrackerResult<Vec<Entry>> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries()?;
        entries.push(entry);
        self.write_entries(&entries)?;
        Ok(entries)
    }

    fn replace(&self, index: usize, entry: Entry) -> TrackerResult<Vec<Entry>> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries()?;
        let len = entries.len();
        let slot = entries
            .get_mut(index)
            .ok_or(TrackerError::InvalidIndex { index, len })?;
        *slot = entry;
        self.write_entries(&entries)?;
        Ok(entries)
    }

    fn remove(&self, index: usize) -> TrackerResult<Vec<Entry>> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries()?;
        if index >= entries.len() {
            return Err(TrackerError::InvalidIndex {
                index,
                len: entries.len(),
            });
        }
        entries.remove(index);
        self.write_entries(&entries)?;
        Ok(entries)
    }
}
