//! The address book: records keyed by contact name.
//!
//! Records are kept in insertion order. Overwriting a name keeps the slot of
//! the original entry, and deleting preserves the order of the rest, so
//! [`Directory::batches`] and [`Directory::search`] are deterministic.

pub mod batches;
pub mod snapshot;

pub use batches::{Batches, DEFAULT_BATCH_SIZE};
pub use snapshot::{Snapshot, SnapshotRecord, SNAPSHOT_VERSION};

use crate::error::{BookError, BookResult, StorageResult};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::Path;

/// What [`Directory::load_from_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The snapshot was read; the directory now holds this many records.
    Loaded(usize),

    /// No file at the path; the directory was left as it was.
    Missing,
}

/// A collection of contact records keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already filed
    /// there. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        if let Some(old) = &replaced {
            tracing::debug!(contact = %old.name(), "Replaced existing record");
        }
        replaced
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access for editing phones or birthday in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Split the records into consecutive chunks of `size`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` when `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::{Directory, Record};
    ///
    /// let mut book = Directory::new();
    /// for name in ["Anna", "Bob", "Carl"] {
    ///     book.add_record(Record::new(name).unwrap());
    /// }
    /// let sizes: Vec<usize> = book.batches(2).unwrap().map(|b| b.len()).collect();
    /// assert_eq!(sizes, vec![2, 1]);
    /// ```
    pub fn batches(&self, size: usize) -> BookResult<Batches<'_>> {
        if size == 0 {
            return Err(BookError::InvalidBatchSize(size));
        }
        Ok(Batches::new(self.records.values(), size))
    }

    /// Records whose name contains `query` (ignoring case) or whose phone
    /// contains `query` verbatim. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records.values().filter(|r| r.matches(query)).collect()
    }

    /// Records with a birthday in the next `within_days` days (today counts
    /// as 0), soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|r| r.days_to_birthday_from(today).map(|days| (r, days)))
            .filter(|(_, days)| *days <= within_days)
            .collect();
        // Stable sort keeps insertion order among equal day counts
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// Write the whole directory to `path`, overwriting any existing file.
    ///
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        let json = Snapshot::capture(self.records.values()).to_json()?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), records = self.len(), "Saved contact book");
        Ok(())
    }

    /// Replace the in-memory records with the snapshot at `path`.
    ///
    /// A missing file is not an error: a warning is logged and the directory
    /// keeps its current contents. On any other failure the directory is
    /// also left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<LoadStatus> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "File not found, starting with the current contact book"
                );
                return Ok(LoadStatus::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = Snapshot::from_json(&json)?;
        let mut records = IndexMap::with_capacity(snapshot.records.len());
        for record in snapshot.into_records() {
            records.insert(record.name().as_str().to_string(), record);
        }
        self.records = records;

        tracing::info!(path = %path.display(), records = self.len(), "Loaded contact book");
        Ok(LoadStatus::Loaded(self.len()))
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
