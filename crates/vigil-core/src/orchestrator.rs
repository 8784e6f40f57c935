//! The decision orchestrator: one request-scoped pass through the pipeline.
//!
//! The pipeline ordering is fixed:
//!
//!   validate → classify → score → resolve → escalate → trace → audit
//!
//! Availability is the governing invariant: once input validation passes,
//! `decide()` always produces a decision. A classifier failure downgrades
//! to benign/zero-confidence; an audit append failure is logged and
//! discarded. Neither ever reaches the caller.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use vigil_contracts::{
    decision::{Decision, DecisionTrace, RequestId, ThreatVerdict},
    error::{VigilError, VigilResult},
    record::AuditRecord,
    threat::{ConfidenceLevel, Signal},
};

use crate::{
    escalation::EscalationEngine,
    fingerprint::fingerprint,
    traits::{Classifier, EventStore, RiskPolicy},
};

/// Maximum accepted message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// The central orchestrator that drives one analysis request at a time.
///
/// Owns the pipeline components behind their trait seams; requests are
/// independent, so a single orchestrator may be shared across threads.
pub struct Orchestrator {
    classifier: Box<dyn Classifier>,
    policy: Box<dyn RiskPolicy>,
    store: Arc<dyn EventStore>,
    escalation: EscalationEngine,
}

impl Orchestrator {
    /// Create an orchestrator from its components.
    ///
    /// The store is shared (`Arc`) because the escalation engine reads the
    /// same trail the orchestrator appends to.
    pub fn new(
        classifier: Box<dyn Classifier>,
        policy: Box<dyn RiskPolicy>,
        store: Arc<dyn EventStore>,
        escalation: EscalationEngine,
    ) -> Self {
        Self {
            classifier,
            policy,
            store,
            escalation,
        }
    }

    /// Analyze one message and decide its enforcement action.
    ///
    /// # Pipeline
    ///
    /// 1. Validate the input (non-empty, at most [`MAX_MESSAGE_CHARS`]).
    /// 2. Classify; an `Err` falls back to benign/zero-confidence.
    /// 3. Score the (category, confidence) pair and resolve the base action.
    /// 4. Fingerprint the message and evaluate escalation against the trail.
    /// 5. Assemble the explainability trace.
    /// 6. Append the audit record — best-effort; an `Err` is logged and
    ///    deliberately discarded.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::InvalidInput` for an empty or oversized
    /// message. No other error escapes.
    pub fn decide(&self, message: &str, signals: &[Signal]) -> VigilResult<Decision> {
        if message.is_empty() {
            return Err(VigilError::InvalidInput {
                reason: "message must not be empty".to_string(),
            });
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(VigilError::InvalidInput {
                reason: format!("message exceeds {MAX_MESSAGE_CHARS} characters"),
            });
        }

        let request_id = RequestId::new();

        debug!(
            request_id = %request_id,
            message_chars = message.chars().count(),
            signal_count = signals.len(),
            "analysis starting"
        );

        // ── Classification ───────────────────────────────────────────────────
        //
        // The classifier is the only untrusted component; its failure is
        // recovered here and never propagated.
        let verdict = match self.classifier.classify(message, signals) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    error = %e,
                    "classifier failed, falling back to benign"
                );
                ThreatVerdict::fallback(format!("classifier unavailable: {e}"))
            }
        };
        let confidence = verdict.confidence.clamp(0.0, 1.0);

        // ── Risk scoring and base action ─────────────────────────────────────
        let assessment = self.policy.assess(verdict.threat_type, confidence);

        // ── Escalation against the trail window ──────────────────────────────
        let message_fingerprint = fingerprint(message);
        let memory = self.escalation.evaluate(
            self.store.as_ref(),
            &message_fingerprint,
            verdict.threat_type,
            assessment.action,
        );

        // ── Explainability trace ─────────────────────────────────────────────
        let confidence_level = ConfidenceLevel::from_confidence(confidence);
        let trace = DecisionTrace {
            llm_threat: verdict.threat_type,
            confidence,
            risk_score: assessment.score,
            base_action: assessment.action,
            memory_hits: memory.occurrence_count,
            final_action: memory.final_action,
        };

        // ── Audit append (best-effort) ───────────────────────────────────────
        let record = AuditRecord {
            request_id,
            timestamp: Utc::now(),
            message_fingerprint,
            threat_type: verdict.threat_type,
            confidence,
            risk_score: assessment.score,
            base_action: assessment.action,
            final_action: memory.final_action,
            signals: signals.to_vec(),
            model_identifier: self.classifier.model_identifier().to_string(),
            confidence_level,
            decision_trace: trace.clone(),
        };
        if let Err(e) = self.store.append(&record) {
            // Logging must never degrade the decision; the failure is
            // diagnostic-only.
            warn!(request_id = %request_id, error = %e, "audit append failed");
        }

        info!(
            request_id = %request_id,
            threat_type = %verdict.threat_type,
            risk_score = assessment.score,
            base_action = %assessment.action,
            final_action = %memory.final_action,
            occurrences = memory.occurrence_count,
            "decision complete"
        );

        Ok(Decision {
            request_id,
            threat_type: verdict.threat_type,
            confidence,
            reason: verdict.reason,
            risk_score: assessment.score,
            base_action: assessment.action,
            final_action: memory.final_action,
            occurrence_count: memory.occurrence_count,
            confidence_level,
            trace,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
