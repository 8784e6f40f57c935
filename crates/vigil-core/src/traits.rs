//! Core trait definitions for the vigil decision pipeline.
//!
//! Three seams define the pipeline's trust boundary:
//!
//! - `Classifier` — untrusted verdict source (usually an external model)
//! - `RiskPolicy` — trusted, deterministic score→action mapping
//! - `EventStore` — trusted sink and history source (the append-only trail)
//!
//! The orchestrator wires them together. The escalation engine reads
//! history exclusively through `EventStore::read_window` — it keeps no
//! state of its own, so a seeded store fully determines its behavior.

use chrono::Duration;

use vigil_contracts::{
    decision::{RiskAssessment, ThreatVerdict},
    error::VigilResult,
    record::AuditRecord,
    threat::{Signal, ThreatType},
};

/// The natural-language threat classifier boundary.
///
/// Implementations are **untrusted** — they are typically backed by an
/// external model call and may time out, return garbage, or fail outright.
/// The orchestrator downgrades any `Err` to `ThreatVerdict::fallback`
/// (benign, zero confidence); a classifier failure never fails a request.
pub trait Classifier: Send + Sync {
    /// Classify one message, given the signals extracted from it.
    ///
    /// A well-behaved implementation returns `confidence` in `[0.0, 1.0]`;
    /// the pipeline clamps defensively regardless.
    fn classify(&self, message: &str, signals: &[Signal]) -> VigilResult<ThreatVerdict>;

    /// Name/version of the underlying model, stamped into every audit
    /// record as `model_identifier`.
    fn model_identifier(&self) -> &str;
}

/// The risk scorer and policy resolver.
///
/// Implementations are **trusted** and must be pure and total: every
/// (category, confidence) pair maps to exactly one assessment, with no I/O
/// and no failure modes.
pub trait RiskPolicy: Send + Sync {
    /// Map a classification to a bounded score and the base action its
    /// thresholds imply. The base action ignores history entirely.
    fn assess(&self, threat_type: ThreatType, confidence: f64) -> RiskAssessment;
}

/// The append-only audit trail.
///
/// The trail serves two roles at once: the durability log of every
/// decision, and the only state store the escalation engine consults.
/// Implementations vary (file-backed for production, in-memory for tests)
/// without touching the engine's logic.
pub trait EventStore: Send + Sync {
    /// Durably append one record.
    ///
    /// Appends are best-effort by contract: callers must treat an `Err` as
    /// diagnostic-only and never let it abort the primary request. The
    /// error is surfaced in the signature so the deliberate discard is
    /// visible at the call site. Records are never modified or deleted.
    fn append(&self, record: &AuditRecord) -> VigilResult<()>;

    /// Return all syntactically valid records whose timestamp lies within
    /// `max_age` of now, newest first.
    ///
    /// Infallible: a missing or unreadable store yields an empty vector,
    /// and callers must treat "no history" as the safe default. Malformed
    /// entries and unparsable timestamps are skipped individually;
    /// out-of-order timestamps are filtered per-record, never assumed
    /// contiguous. Implementations may scan backward from the tail — the
    /// contract does not require visiting the full history.
    fn read_window(&self, max_age: Duration) -> Vec<AuditRecord>;
}
