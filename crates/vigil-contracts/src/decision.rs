//! Request-scoped decision types.
//!
//! These types flow through one analysis request: the classifier's raw
//! verdict, the scorer's assessment, the escalation engine's verdict, and
//! the final `Decision` with its explainability trace.

use serde::{Deserialize, Serialize};

use crate::threat::{Action, ConfidenceLevel, ThreatType};

/// Unique identifier for a single analysis request.
///
/// Generated per request and stamped into the audit record and the
/// response, so a caller-visible decision can always be joined back to its
/// trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The classifier boundary's output for one message.
///
/// The orchestrator treats a failed or malformed classification as
/// [`ThreatVerdict::fallback`] — benign with zero confidence — so the
/// decision pipeline always completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatVerdict {
    /// The assigned category.
    pub threat_type: ThreatType,
    /// Classifier confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// One-sentence explanation from the classifier.
    pub reason: String,
}

impl ThreatVerdict {
    /// The fail-safe verdict used when the classifier is unavailable or
    /// returns unusable output: benign, zero confidence.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            threat_type: ThreatType::Benign,
            confidence: 0.0,
            reason: reason.into(),
        }
    }
}

/// The risk scorer + policy resolver output: a bounded score and the base
/// action derived from it, before history is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Integer severity score in `[0, 100]`.
    pub score: u8,
    /// The action the score maps to under the configured thresholds.
    pub action: Action,
}

/// The escalation engine's output for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryVerdict {
    /// The action after escalation rules are applied. Never less severe
    /// than the base action.
    pub final_action: Action,
    /// Occurrences of this fingerprint within the window, counting the
    /// current request. A never-seen fingerprint yields 1.
    pub occurrence_count: u32,
}

/// The explainability snapshot assembled for every decision.
///
/// One trace is embedded in the response and in the audit record, so a
/// reviewer can reconstruct exactly why an action was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    /// The classifier's category.
    pub llm_threat: ThreatType,
    /// The classifier's confidence.
    pub confidence: f64,
    /// The computed risk score.
    pub risk_score: u8,
    /// The action before escalation.
    pub base_action: Action,
    /// Window occurrences of this fingerprint, including this request.
    pub memory_hits: u32,
    /// The action actually enforced.
    pub final_action: Action,
}

/// The orchestrator's result for one analyzed message.
///
/// This is the full response-boundary payload: verdict, score, actions,
/// bucketed confidence, and the trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Identifier joining this decision to its audit record.
    pub request_id: RequestId,
    /// The classifier's category.
    pub threat_type: ThreatType,
    /// The classifier's confidence, clamped to `[0.0, 1.0]`.
    pub confidence: f64,
    /// The classifier's explanation.
    pub reason: String,
    /// Integer severity score in `[0, 100]`.
    pub risk_score: u8,
    /// The action derived from the score alone.
    pub base_action: Action,
    /// The enforced action after escalation.
    pub final_action: Action,
    /// Window occurrences of this fingerprint, including this request.
    pub occurrence_count: u32,
    /// Bucketed confidence.
    pub confidence_level: ConfidenceLevel,
    /// The full explainability snapshot.
    pub trace: DecisionTrace,
}
