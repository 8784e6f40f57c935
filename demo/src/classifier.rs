//! A deterministic keyword classifier.
//!
//! Stands in for the external model behind the `Classifier` boundary so
//! the demo runs offline and reproducibly. Rules are evaluated in order of
//! specificity; the first match wins. A production deployment would swap
//! this for a model-backed implementation — the rest of the pipeline does
//! not change.

use vigil_contracts::{
    decision::ThreatVerdict,
    error::VigilResult,
    threat::{Signal, ThreatType},
};
use vigil_core::traits::Classifier;

const MODEL_IDENTIFIER: &str = "keyword-heuristic-v1";

const CREDENTIAL_STRONG: &[&str] = &[
    "password",
    "verify your account",
    "confirm your identity",
    "login credentials",
    "account suspended",
];

const CREDENTIAL_WEAK: &[&str] = &["verify", "reset link", "sign in"];

const INJECTION: &[&str] = &[
    "ignore previous instructions",
    "disregard your instructions",
    "system prompt",
    "you are now",
];

const MALWARE: &[&str] = &[
    ".exe",
    "download the attachment",
    "install this update",
    "enable macros",
];

const SCAM: &[&str] = &[
    "wire transfer",
    "gift card",
    "bitcoin",
    "prize",
    "lottery",
    "processing fee",
    "inheritance",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Keyword-driven `Classifier` implementation.
pub struct KeywordClassifier;

impl Classifier for KeywordClassifier {
    fn classify(&self, message: &str, signals: &[Signal]) -> VigilResult<ThreatVerdict> {
        let lower = message.to_lowercase();
        let has_link = signals.contains(&Signal::Link);

        if contains_any(&lower, INJECTION) {
            return Ok(ThreatVerdict {
                threat_type: ThreatType::PromptInjection,
                confidence: 0.85,
                reason: "instruction-override phrasing".to_string(),
            });
        }

        if contains_any(&lower, MALWARE) {
            return Ok(ThreatVerdict {
                threat_type: ThreatType::Malware,
                confidence: if has_link { 0.9 } else { 0.75 },
                reason: "malicious download indicators".to_string(),
            });
        }

        if contains_any(&lower, CREDENTIAL_STRONG) {
            return Ok(ThreatVerdict {
                threat_type: ThreatType::Phishing,
                confidence: if has_link { 0.9 } else { 0.7 },
                reason: "credential harvesting language".to_string(),
            });
        }

        if contains_any(&lower, SCAM) {
            return Ok(ThreatVerdict {
                threat_type: ThreatType::Scam,
                confidence: 0.8,
                reason: "financial fraud pattern".to_string(),
            });
        }

        if signals.contains(&Signal::AuthorityClaim) && signals.contains(&Signal::Urgency) {
            return Ok(ThreatVerdict {
                threat_type: ThreatType::Impersonation,
                confidence: 0.65,
                reason: "urgent request claiming authority".to_string(),
            });
        }

        if contains_any(&lower, CREDENTIAL_WEAK) {
            // Weak hint only: below the flag band on its own, but repeats
            // still accumulate in the trail.
            return Ok(ThreatVerdict {
                threat_type: ThreatType::Phishing,
                confidence: 0.45,
                reason: "weak credential-harvesting hint".to_string(),
            });
        }

        Ok(ThreatVerdict {
            threat_type: ThreatType::Benign,
            confidence: 0.9,
            reason: "no threat indicators matched".to_string(),
        })
    }

    fn model_identifier(&self) -> &str {
        MODEL_IDENTIFIER
    }
}
