//! The memory/escalation engine: sliding-window repeat-offense detection.
//!
//! The engine reads a recent window of the audit trail, counts prior
//! occurrences of a message fingerprint, and applies deterministic rules to
//! upgrade the base action. All state lives in the trail — the engine is a
//! pure function of (fingerprint, category, count), which makes it testable
//! by seeding a store and asserting the output.
//!
//! Rule precedence (first true rule wins):
//!
//! 1. Benign never escalates, regardless of count.
//! 2. Phishing/malware with `count >= campaign_threshold` → block, even
//!    when the base action is allow.
//! 3. A flagged message with `count >= repeat_threshold` → block.
//! 4. Otherwise the base action stands.

use chrono::Duration;
use tracing::{debug, warn};

use vigil_contracts::{
    decision::MemoryVerdict,
    threat::{Action, ThreatType},
};

use crate::traits::EventStore;

/// Default lookback window for repeat counting.
const DEFAULT_WINDOW_MINUTES: i64 = 10;

/// Occurrences at which a flagged payload is upgraded to block.
const DEFAULT_REPEAT_THRESHOLD: u32 = 3;

/// Occurrences at which a phishing/malware payload is blocked outright.
const DEFAULT_CAMPAIGN_THRESHOLD: u32 = 5;

/// The deterministic escalation engine.
///
/// Escalation memory decays with time: occurrences outside the window are
/// invisible, so this is a sliding-window detector, not a permanent ban
/// list. Thresholds are inclusive — a count exactly at a threshold
/// escalates.
#[derive(Debug, Clone)]
pub struct EscalationEngine {
    window: Duration,
    repeat_threshold: u32,
    campaign_threshold: u32,
}

impl Default for EscalationEngine {
    fn default() -> Self {
        Self {
            window: Duration::minutes(DEFAULT_WINDOW_MINUTES),
            repeat_threshold: DEFAULT_REPEAT_THRESHOLD,
            campaign_threshold: DEFAULT_CAMPAIGN_THRESHOLD,
        }
    }
}

impl EscalationEngine {
    /// Create an engine with a custom lookback window and the default
    /// thresholds.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// The configured lookback window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Evaluate escalation for one request.
    ///
    /// Counts records in the store's recent window whose fingerprint equals
    /// `fingerprint`; the current request (not yet logged) counts as one
    /// occurrence, so a never-seen fingerprint yields
    /// `occurrence_count = 1`.
    ///
    /// The returned `final_action` is never less severe than
    /// `base_action` — escalation only ever tightens.
    pub fn evaluate(
        &self,
        store: &dyn EventStore,
        fingerprint: &str,
        threat_type: ThreatType,
        base_action: Action,
    ) -> MemoryVerdict {
        let history = store.read_window(self.window);
        let prior = history
            .iter()
            .filter(|record| record.message_fingerprint == fingerprint)
            .count() as u32;
        let occurrence_count = prior + 1;

        debug!(
            fingerprint = %fingerprint,
            threat_type = %threat_type,
            occurrences = occurrence_count,
            window_records = history.len(),
            "escalation evaluation"
        );

        // Benign short-circuits before any other rule: a benign flood is
        // never escalated, though the count is still reported.
        if threat_type == ThreatType::Benign {
            return MemoryVerdict {
                final_action: base_action,
                occurrence_count,
            };
        }

        // Campaign rule: repeated phishing/malware payloads are blocked
        // outright, even when low confidence left the base action at allow.
        if threat_type.is_campaign_category() && occurrence_count >= self.campaign_threshold {
            warn!(
                fingerprint = %fingerprint,
                threat_type = %threat_type,
                occurrences = occurrence_count,
                "campaign threshold reached, forcing block"
            );
            return MemoryVerdict {
                final_action: Action::Block,
                occurrence_count,
            };
        }

        // Repeat rule: a payload the policy already flags is blocked once
        // it keeps coming back.
        if base_action == Action::Flag && occurrence_count >= self.repeat_threshold {
            warn!(
                fingerprint = %fingerprint,
                threat_type = %threat_type,
                occurrences = occurrence_count,
                "repeated flagged payload, escalating to block"
            );
            return MemoryVerdict {
                final_action: Action::Block,
                occurrence_count,
            };
        }

        MemoryVerdict {
            final_action: base_action,
            occurrence_count,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
