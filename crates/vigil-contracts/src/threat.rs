//! Threat classification and enforcement action types.
//!
//! These enums are closed on purpose: every record in the audit trail and
//! every decision returned to callers uses exactly these discriminants, in
//! snake_case on the wire.

use serde::{Deserialize, Serialize};

/// The threat category assigned to a single chat message.
///
/// Produced by the classifier boundary and consumed by the risk scorer and
/// the escalation engine. `Benign` is the fail-safe value: classifier
/// failures are downgraded to it rather than surfaced as request errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatType {
    /// Credential harvesting or account takeover.
    Phishing,
    /// Financial or social-engineering fraud.
    Scam,
    /// Malicious downloads or links.
    Malware,
    /// Pretending to be an authority or trusted entity.
    Impersonation,
    /// Attempts to override AI instructions.
    PromptInjection,
    /// No threat detected.
    Benign,
}

impl ThreatType {
    /// True for categories that indicate a coordinated campaign when the
    /// same payload repeats: phishing and malware.
    ///
    /// The escalation engine applies its most aggressive rule to these.
    pub fn is_campaign_category(&self) -> bool {
        matches!(self, ThreatType::Phishing | ThreatType::Malware)
    }

    /// The snake_case name used on the wire and in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatType::Phishing => "phishing",
            ThreatType::Scam => "scam",
            ThreatType::Malware => "malware",
            ThreatType::Impersonation => "impersonation",
            ThreatType::PromptInjection => "prompt_injection",
            ThreatType::Benign => "benign",
        }
    }
}

impl std::fmt::Display for ThreatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The enforcement action for a message.
///
/// Variants are declared in ascending severity so the derived `Ord` gives
/// `Allow < Flag < Block`. Escalation relies on this ordering: a final
/// action is always `>=` the base action it was derived from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Deliver the message unmodified.
    Allow,
    /// Deliver the message but mark it for review.
    Flag,
    /// Refuse to deliver the message.
    Block,
}

impl Action {
    /// The snake_case name used on the wire and in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Allow => "allow",
            Action::Flag => "flag",
            Action::Block => "block",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coarse bucket derived from the classifier's confidence value.
///
/// Reported alongside the raw confidence so downstream consumers can
/// threshold without re-deriving the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Bucket a raw confidence: `>= 0.7` → High, `>= 0.4` → Medium,
    /// otherwise Low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceLevel::High
        } else if confidence >= 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// An auxiliary indicator extracted from the message before classification.
///
/// Signals are carried through to the audit record for observability; they
/// do not influence the risk score directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Urgency language ("act now", "immediately", ...).
    Urgency,
    /// The sender claims to be an authority ("IT team", "admin", ...).
    AuthorityClaim,
    /// The message contains at least one URL.
    Link,
}
