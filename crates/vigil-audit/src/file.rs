//! File-backed implementation of `EventStore`.
//!
//! The trail is one newline-delimited sequence of JSON objects: each line
//! is an independent, fully self-describing record, so the file stays
//! human-inspectable with nothing but `tail` and `jq`. No index, no
//! compaction — append-only.
//!
//! Failure discipline:
//! - `append` reports every failure as `AuditWriteFailed`; the caller
//!   decides to discard it (the orchestrator does, by contract).
//! - `read_window` never fails: an unreadable file is an empty window and
//!   corrupt lines are skipped one by one.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Duration, Utc};
use tracing::debug;

use vigil_contracts::{
    error::{VigilError, VigilResult},
    record::AuditRecord,
};
use vigil_core::traits::EventStore;

/// An append-only audit trail backed by a line-delimited JSON file.
///
/// The backing path is injected at construction — there is no ambient
/// default. Parent directories are created on demand.
///
/// # Thread safety
///
/// Appends serialize on an internal mutex and each record goes out as a
/// single `write_all` on a descriptor opened with `O_APPEND`, so lines are
/// never interleaved. Reads do not take the lock: the escalation engine
/// tolerates a slightly stale view of concurrent appends.
pub struct FileAuditTrail {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl FileAuditTrail {
    /// Create a trail that appends to `path`.
    ///
    /// The file itself is not touched until the first append, so
    /// constructing a trail over a missing file is cheap and valid — its
    /// window is simply empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_append(&self) -> std::io::Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

impl EventStore for FileAuditTrail {
    /// Serialize `record` to one JSON line and append it.
    ///
    /// Returns `AuditWriteFailed` on any serialization or I/O error; the
    /// trail itself is left untouched by a failed append.
    fn append(&self, record: &AuditRecord) -> VigilResult<()> {
        let mut line =
            serde_json::to_string(record).map_err(|e| VigilError::AuditWriteFailed {
                reason: format!("failed to serialize audit record: {}", e),
            })?;
        line.push('\n');

        let _guard = self
            .append_lock
            .lock()
            .map_err(|e| VigilError::AuditWriteFailed {
                reason: format!("append lock poisoned: {}", e),
            })?;

        let mut file = self.open_append().map_err(|e| VigilError::AuditWriteFailed {
            reason: format!("failed to open '{}': {}", self.path.display(), e),
        })?;

        // One write_all for the whole line keeps the record atomic at line
        // granularity.
        file.write_all(line.as_bytes())
            .map_err(|e| VigilError::AuditWriteFailed {
                reason: format!("failed to append to '{}': {}", self.path.display(), e),
            })
    }

    /// Scan the trail from the tail and return records newer than
    /// `max_age`, newest first.
    ///
    /// Each line is parsed and filtered independently: malformed lines and
    /// lines whose timestamp does not parse are skipped, and out-of-order
    /// timestamps are handled per-record rather than by assuming the file
    /// is sorted. A missing or unreadable file yields an empty window.
    fn read_window(&self, max_age: Duration) -> Vec<AuditRecord> {
        let cutoff = Utc::now() - max_age;

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(
                    path = %self.path.display(),
                    error = %e,
                    "audit trail unreadable, treating as empty history"
                );
                return Vec::new();
            }
        };

        contents
            .lines()
            .rev()
            .filter_map(|line| serde_json::from_str::<AuditRecord>(line).ok())
            .filter(|record| record.timestamp >= cutoff)
            .collect()
    }
}
