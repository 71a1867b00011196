//! The immutable Record Set.
//!
//! Built once from the rows a data source supplies and shared read-only afterwards.
//! Cloning a [`RecordSet`] is cheap: the records and their precomputed search blobs live
//! behind an `Arc`.

use crate::record::{RawRecord, Record};
use crate::status::LoadStatus;
use std::sync::Arc;

#[derive(Debug)]
struct Entry {
    record: Record,
    blob: String,
}

/// Ordered, immutable collection of normalized records.
#[derive(Debug, Clone)]
pub struct RecordSet {
    entries: Arc<[Entry]>,
}

impl RecordSet {
    /// Create a record set from already normalized records.
    pub fn new(records: Vec<Record>) -> Self {
        let entries: Vec<Entry> = records
            .into_iter()
            .map(|record| {
                let blob = record.search_blob();
                Entry { record, blob }
            })
            .collect();

        Self {
            entries: entries.into(),
        }
    }

    /// Normalize raw rows into a record set, preserving their order.
    pub fn from_raw<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        Self::new(rows.into_iter().map(Record::from).collect())
    }

    /// A record set with no records.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record at a position in the original order.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.entries.get(index).map(|entry| &entry.record)
    }

    /// Iterate over records in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Iterate over precomputed search blobs, aligned with [`RecordSet::iter`].
    pub(crate) fn blobs(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.blob.as_str())
    }

    pub fn load_status(&self) -> LoadStatus {
        LoadStatus::from_total(self.len())
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<RawRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = RawRecord>>(iter: T) -> Self {
        Self::from_raw(iter)
    }
}
