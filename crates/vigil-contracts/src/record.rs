//! The audit record: one immutable entry per analyzed message.
//!
//! Records are appended to the trail after the final action is known and
//! are never mutated or deleted. Later requests read them back only for
//! aggregation — the escalation engine counts fingerprint matches inside a
//! trailing time window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    decision::{DecisionTrace, RequestId},
    threat::{Action, ConfidenceLevel, Signal, ThreatType},
};

/// An immutable record of one decision, serialized as a single JSON line.
///
/// The raw message text is never stored — only its one-way fingerprint,
/// which doubles as the join key for repeat-offense counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// The request this record belongs to.
    pub request_id: RequestId,

    /// Wall-clock time (UTC) the record was created. Non-decreasing in
    /// append order for a single-writer process; readers must tolerate
    /// skew introduced by clock adjustments or manual edits.
    pub timestamp: DateTime<Utc>,

    /// SHA-256 hex digest of the raw message content.
    pub message_fingerprint: String,

    /// The classifier's category.
    pub threat_type: ThreatType,

    /// The classifier's confidence in `[0.0, 1.0]`.
    pub confidence: f64,

    /// Integer severity score in `[0, 100]`.
    pub risk_score: u8,

    /// The action derived from the score alone.
    pub base_action: Action,

    /// The enforced action. Equals `base_action` unless escalation
    /// occurred; never less severe than it.
    pub final_action: Action,

    /// Auxiliary indicator tags extracted from the message.
    pub signals: Vec<Signal>,

    /// Name/version of the classifier that produced the verdict.
    pub model_identifier: String,

    /// Bucketed confidence.
    pub confidence_level: ConfidenceLevel,

    /// The full explainability snapshot for this decision.
    pub decision_trace: DecisionTrace,
}
