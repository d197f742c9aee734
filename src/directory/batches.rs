//! Batched iteration over directory records.

use crate::models::Record;
use indexmap::map::Values;
use std::iter::FusedIterator;

/// Batch size used when the caller has no preference.
pub const DEFAULT_BATCH_SIZE: usize = 1;

/// Lazy iterator yielding consecutive chunks of records in insertion order.
///
/// Every chunk holds `size` records except possibly the last one. The
/// iterator borrows the directory and is consumed as it goes, so a fresh
/// pass needs a fresh call to [`crate::Directory::batches`].
pub struct Batches<'a> {
    records: Values<'a, String, Record>,
    size: usize,
}

impl<'a> Batches<'a> {
    pub(crate) fn new(records: Values<'a, String, Record>, size: usize) -> Self {
        debug_assert!(size > 0);
        Self { records, size }
    }

    /// Number of records per full batch.
    pub fn batch_size(&self) -> usize {
        self.size
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<&'a Record> = self.records.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().div_ceil(self.size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
