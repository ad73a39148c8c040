//! Visitor storage.

use std::sync::{Mutex, PoisonError};

use super::types::VisitorRecord;

/// Storage backend for visitor records.
///
/// Implementations only append and read; records are never updated or
/// removed.
pub trait VisitorStore: Send + Sync {
    /// Appends one record.
    fn append(&self, record: VisitorRecord);

    /// Returns every record in insertion order.
    fn snapshot(&self) -> Vec<VisitorRecord>;

    /// Number of stored records.
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store backed by a `Vec`.
///
/// Appends are serialized by a mutex. The vector is never trimmed, so memory
/// grows with every visit until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryVisitorStore {
    records: Mutex<Vec<VisitorRecord>>,
}

impl InMemoryVisitorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitorStore for InMemoryVisitorStore {
    fn append(&self, record: VisitorRecord) {
        // A panic while holding the lock cannot leave a half-pushed record
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    fn snapshot(&self) -> Vec<VisitorRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
