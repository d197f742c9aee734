//! Versioned on-disk encoding of the directory.
//!
//! The snapshot is pretty-printed JSON so it can be inspected and edited by
//! hand:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Anna", "phones": ["0501234567"], "birthday": "1990.05.17" }
//!   ]
//! }
//! ```
//!
//! Field values are re-validated while decoding, so a hand-edited file with a
//! bad phone number is rejected instead of loaded.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub name: ContactName,

    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl From<&Record> for SnapshotRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<SnapshotRecord> for Record {
    fn from(entry: SnapshotRecord) -> Self {
        Record::from_parts(entry.name, entry.phones, entry.birthday)
    }
}

/// The whole directory as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub records: Vec<SnapshotRecord>,
}

impl Snapshot {
    /// Capture records in the order given.
    pub fn capture<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: records.into_iter().map(SnapshotRecord::from).collect(),
        }
    }

    pub fn to_json(&self) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and version-check a snapshot.
    ///
    /// # Errors
    ///
    /// - `StorageError::Json` for malformed JSON or invalid field values
    /// - `StorageError::UnsupportedVersion` for any version other than
    ///   [`SNAPSHOT_VERSION`]
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    pub fn into_records(self) -> impl Iterator<Item = Record> {
        self.records.into_iter().map(Record::from)
    }
}
