//! # vigil-audit
//!
//! Append-only, line-delimited JSON audit trail for the vigil triage
//! runtime.
//!
//! ## Overview
//!
//! Every decision the orchestrator completes is appended to the trail as
//! one self-describing JSON line. The same trail is the only state the
//! escalation engine consults — `read_window` serves the sliding-window
//! repeat counter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vigil_audit::FileAuditTrail;
//! use vigil_core::traits::EventStore;
//!
//! let trail = FileAuditTrail::new("logs/audit.log");
//! trail.append(&record)?;
//! let recent = trail.read_window(chrono::Duration::minutes(10));
//! ```

pub mod file;
pub mod memory;

pub use file::FileAuditTrail;
pub use memory::InMemoryAuditTrail;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    use vigil_contracts::{
        decision::{DecisionTrace, RequestId},
        record::AuditRecord,
        threat::{Action, ConfidenceLevel, Signal, ThreatType},
    };
    use vigil_core::{traits::EventStore, EscalationEngine};

    use super::{FileAuditTrail, InMemoryAuditTrail};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a record for the given fingerprint, backdated by `minutes_ago`.
    fn make_record(fingerprint: &str, minutes_ago: i64) -> AuditRecord {
        AuditRecord {
            request_id: RequestId::new(),
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            message_fingerprint: fingerprint.to_string(),
            threat_type: ThreatType::Scam,
            confidence: 0.6,
            risk_score: 48,
            base_action: Action::Flag,
            final_action: Action::Flag,
            signals: vec![Signal::Urgency],
            model_identifier: "test-model-v1".to_string(),
            confidence_level: ConfidenceLevel::Medium,
            decision_trace: DecisionTrace {
                llm_threat: ThreatType::Scam,
                confidence: 0.6,
                risk_score: 48,
                base_action: Action::Flag,
                memory_hits: 1,
                final_action: Action::Flag,
            },
        }
    }

    // ── File trail: append ────────────────────────────────────────────────────

    /// An append produces exactly one parseable JSON line.
    #[test]
    fn file_append_writes_one_json_line() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("audit.log"));

        let record = make_record("fp-append", 0);
        trail.append(&record).unwrap();

        let contents = fs::read_to_string(trail.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let decoded: AuditRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(decoded.request_id, record.request_id);
        assert_eq!(decoded.message_fingerprint, "fp-append");
        assert_eq!(decoded.final_action, Action::Flag);
        assert_eq!(decoded.signals, vec![Signal::Urgency]);
    }

    /// Appends accumulate in write order; nothing is ever overwritten.
    #[test]
    fn file_appends_are_ordered_and_additive() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("audit.log"));

        let first = make_record("fp-first", 0);
        let second = make_record("fp-second", 0);
        trail.append(&first).unwrap();
        trail.append(&second).unwrap();

        let contents = fs::read_to_string(trail.path()).unwrap();
        let fingerprints: Vec<String> = contents
            .lines()
            .map(|line| {
                serde_json::from_str::<AuditRecord>(line)
                    .unwrap()
                    .message_fingerprint
            })
            .collect();
        assert_eq!(fingerprints, vec!["fp-first", "fp-second"]);
    }

    /// Missing parent directories are created on the first append.
    #[test]
    fn file_append_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("nested/logs/audit.log"));

        trail.append(&make_record("fp-nested", 0)).unwrap();

        assert!(trail.path().exists());
    }

    // ── File trail: read_window ───────────────────────────────────────────────

    /// A missing file is an empty window, not an error.
    #[test]
    fn file_read_window_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("never-written.log"));

        assert!(trail.read_window(Duration::minutes(10)).is_empty());
    }

    /// Records older than the window are excluded; newer ones returned
    /// newest first.
    #[test]
    fn file_read_window_filters_by_age() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("audit.log"));

        trail.append(&make_record("fp-old", 20)).unwrap();
        trail.append(&make_record("fp-mid", 5)).unwrap();
        trail.append(&make_record("fp-new", 1)).unwrap();

        let window = trail.read_window(Duration::minutes(10));

        let fingerprints: Vec<&str> = window
            .iter()
            .map(|r| r.message_fingerprint.as_str())
            .collect();
        assert_eq!(fingerprints, vec!["fp-new", "fp-mid"]);
    }

    /// Corrupt lines are skipped individually — the valid neighbors still
    /// come back.
    #[test]
    fn file_read_window_skips_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let trail = FileAuditTrail::new(&path);

        trail.append(&make_record("fp-before", 0)).unwrap();
        {
            let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "{{ not json").unwrap();
            writeln!(file, "{{\"timestamp\": \"not-a-time\"}}").unwrap();
        }
        trail.append(&make_record("fp-after", 0)).unwrap();

        let window = trail.read_window(Duration::minutes(10));
        let fingerprints: Vec<&str> = window
            .iter()
            .map(|r| r.message_fingerprint.as_str())
            .collect();
        assert_eq!(fingerprints, vec!["fp-after", "fp-before"]);
    }

    /// Out-of-order timestamps are filtered per-record: an old record
    /// written after a recent one must not hide its neighbors.
    #[test]
    fn file_read_window_tolerates_out_of_order_timestamps() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("audit.log"));

        trail.append(&make_record("fp-recent-1", 1)).unwrap();
        trail.append(&make_record("fp-stale", 25)).unwrap();
        trail.append(&make_record("fp-recent-2", 2)).unwrap();

        let window = trail.read_window(Duration::minutes(10));
        let fingerprints: Vec<&str> = window
            .iter()
            .map(|r| r.message_fingerprint.as_str())
            .collect();
        assert_eq!(fingerprints, vec!["fp-recent-2", "fp-recent-1"]);
    }

    // ── File trail feeding the escalation engine ──────────────────────────────

    /// End to end over a real file: two persisted priors push a flagged
    /// payload to block, while stale priors are invisible.
    #[test]
    fn escalation_counts_from_persisted_trail() {
        let dir = tempdir().unwrap();
        let trail = FileAuditTrail::new(dir.path().join("audit.log"));
        let engine = EscalationEngine::default();

        trail.append(&make_record("fp-live", 3)).unwrap();
        trail.append(&make_record("fp-live", 1)).unwrap();
        trail.append(&make_record("fp-stale", 30)).unwrap();

        let verdict = engine.evaluate(&trail, "fp-live", ThreatType::Scam, Action::Flag);
        assert_eq!(verdict.occurrence_count, 3);
        assert_eq!(verdict.final_action, Action::Block);

        let verdict = engine.evaluate(&trail, "fp-stale", ThreatType::Scam, Action::Flag);
        assert_eq!(verdict.occurrence_count, 1);
        assert_eq!(verdict.final_action, Action::Flag);
    }

    // ── In-memory trail ───────────────────────────────────────────────────────

    #[test]
    fn memory_trail_append_and_snapshot() {
        let trail = InMemoryAuditTrail::new();
        assert!(trail.is_empty());

        trail.append(&make_record("fp-a", 0)).unwrap();
        trail.append(&make_record("fp-b", 0)).unwrap();

        assert_eq!(trail.len(), 2);
        let snapshot = trail.snapshot();
        assert_eq!(snapshot[0].message_fingerprint, "fp-a");
        assert_eq!(snapshot[1].message_fingerprint, "fp-b");
    }

    #[test]
    fn memory_trail_window_matches_file_semantics() {
        let trail = InMemoryAuditTrail::new();
        trail.append(&make_record("fp-old", 20)).unwrap();
        trail.append(&make_record("fp-mid", 5)).unwrap();
        trail.append(&make_record("fp-new", 1)).unwrap();

        let window = trail.read_window(Duration::minutes(10));
        let fingerprints: Vec<&str> = window
            .iter()
            .map(|r| r.message_fingerprint.as_str())
            .collect();
        assert_eq!(fingerprints, vec!["fp-new", "fp-mid"]);
    }
}
