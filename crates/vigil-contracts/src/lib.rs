//! # vigil-contracts
//!
//! Shared types, schemas, and contracts for the vigil triage runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod decision;
pub mod error;
pub mod record;
pub mod threat;

#[cfg(test)]
mod tests {
    use super::*;
    use decision::{RequestId, ThreatVerdict};
    use error::VigilError;
    use threat::{Action, ConfidenceLevel, Signal, ThreatType};

    // ── Action severity ordering ─────────────────────────────────────────────

    #[test]
    fn action_severity_is_total_order() {
        assert!(Action::Allow < Action::Flag);
        assert!(Action::Flag < Action::Block);
        assert!(Action::Allow < Action::Block);

        // max() picks the more severe action — the escalation engine relies
        // on this to only ever tighten.
        assert_eq!(Action::Allow.max(Action::Block), Action::Block);
        assert_eq!(Action::Flag.max(Action::Flag), Action::Flag);
    }

    // ── Wire names ───────────────────────────────────────────────────────────

    #[test]
    fn threat_type_serializes_snake_case() {
        let json = serde_json::to_string(&ThreatType::PromptInjection).unwrap();
        assert_eq!(json, "\"prompt_injection\"");

        let decoded: ThreatType = serde_json::from_str("\"phishing\"").unwrap();
        assert_eq!(decoded, ThreatType::Phishing);
    }

    #[test]
    fn action_round_trips() {
        for action in [Action::Allow, Action::Flag, Action::Block] {
            let json = serde_json::to_string(&action).unwrap();
            let decoded: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, decoded);
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn signal_serializes_snake_case() {
        let json = serde_json::to_string(&Signal::AuthorityClaim).unwrap();
        assert_eq!(json, "\"authority_claim\"");
    }

    #[test]
    fn unknown_threat_type_is_rejected() {
        let result = serde_json::from_str::<ThreatType>("\"ransomware\"");
        assert!(result.is_err(), "the threat enumeration is closed");
    }

    // ── Campaign categories ──────────────────────────────────────────────────

    #[test]
    fn campaign_categories_are_phishing_and_malware() {
        assert!(ThreatType::Phishing.is_campaign_category());
        assert!(ThreatType::Malware.is_campaign_category());

        assert!(!ThreatType::Scam.is_campaign_category());
        assert!(!ThreatType::Impersonation.is_campaign_category());
        assert!(!ThreatType::PromptInjection.is_campaign_category());
        assert!(!ThreatType::Benign.is_campaign_category());
    }

    // ── Confidence bucketing ─────────────────────────────────────────────────

    #[test]
    fn confidence_buckets_at_documented_boundaries() {
        assert_eq!(ConfidenceLevel::from_confidence(0.0), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.39), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.4), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.69), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.7), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(1.0), ConfidenceLevel::High);
    }

    // ── RequestId ────────────────────────────────────────────────────────────

    #[test]
    fn request_id_new_produces_unique_values() {
        let ids: Vec<RequestId> = (0..100).map(|_| RequestId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── Fallback verdict ─────────────────────────────────────────────────────

    #[test]
    fn fallback_verdict_is_benign_zero_confidence() {
        let verdict = ThreatVerdict::fallback("classifier unavailable");
        assert_eq!(verdict.threat_type, ThreatType::Benign);
        assert_eq!(verdict.confidence, 0.0);
        assert!(verdict.reason.contains("unavailable"));
    }

    // ── VigilError display messages ──────────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = VigilError::InvalidInput {
            reason: "message must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn error_audit_write_failed_display() {
        let err = VigilError::AuditWriteFailed {
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("audit write failed"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn error_classifier_failed_display() {
        let err = VigilError::ClassifierFailed {
            reason: "timeout".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("classifier failed"));
        assert!(msg.contains("timeout"));
    }

    #[test]
    fn error_config_error_display() {
        let err = VigilError::ConfigError {
            reason: "flag threshold above block threshold".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("flag threshold"));
    }
}
