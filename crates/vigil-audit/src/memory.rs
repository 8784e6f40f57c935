//! In-memory implementation of `EventStore`.
//!
//! `InMemoryAuditTrail` keeps all records in a `Vec` behind a `Mutex`,
//! with the same windowing semantics as the file trail. Used by tests and
//! demos that should not touch the filesystem; `snapshot()` exposes the
//! accumulated records for assertions.

use std::sync::Mutex;

use chrono::{Duration, Utc};

use vigil_contracts::{
    error::{VigilError, VigilResult},
    record::AuditRecord,
};
use vigil_core::traits::EventStore;

/// An append-only in-memory audit trail.
#[derive(Default)]
pub struct InMemoryAuditTrail {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records appended so far, in append order.
    pub fn snapshot(&self) -> Vec<AuditRecord> {
        self.records.lock().expect("audit trail lock poisoned").clone()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.lock().expect("audit trail lock poisoned").len()
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventStore for InMemoryAuditTrail {
    fn append(&self, record: &AuditRecord) -> VigilResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| VigilError::AuditWriteFailed {
                reason: format!("audit trail lock poisoned: {}", e),
            })?;
        records.push(record.clone());
        Ok(())
    }

    fn read_window(&self, max_age: Duration) -> Vec<AuditRecord> {
        let cutoff = Utc::now() - max_age;
        // A poisoned lock still holds valid records; reads recover rather
        // than panic.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .rev()
            .filter(|record| record.timestamp >= cutoff)
            .cloned()
            .collect()
    }
}
