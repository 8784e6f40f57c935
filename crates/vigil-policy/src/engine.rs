//! The weighted risk policy implementation.
//!
//! `WeightedRiskPolicy` implements the `RiskPolicy` trait from vigil-core:
//!
//! 1. `score = floor(severity(category) × clamp(confidence, 0, 1) × 100)`,
//!    clamped to `[0, 100]`.
//! 2. `resolve` maps the score through the thresholds, high-to-low.
//!
//! Both steps are pure and total — every input maps to exactly one output
//! with no I/O and no error conditions.

use std::path::Path;

use tracing::debug;

use vigil_contracts::{
    decision::RiskAssessment,
    error::{VigilError, VigilResult},
    threat::{Action, ThreatType},
};
use vigil_core::traits::RiskPolicy;

use crate::config::RiskConfig;

/// A `RiskPolicy` backed by configurable severity weights and thresholds.
///
/// `Default` carries the shipped constants; `from_toml_str` / `from_file`
/// load overrides.
///
/// ```rust,ignore
/// use vigil_policy::WeightedRiskPolicy;
///
/// let policy = WeightedRiskPolicy::from_file(Path::new("policies/risk.toml"))?;
/// ```
#[derive(Debug, Default)]
pub struct WeightedRiskPolicy {
    config: RiskConfig,
}

impl WeightedRiskPolicy {
    /// Build a policy from an already-validated configuration.
    pub fn new(config: RiskConfig) -> VigilResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse `s` as TOML and build a policy.
    ///
    /// Returns `VigilError::ConfigError` if the TOML is malformed, does not
    /// match the `RiskConfig` schema, or fails validation.
    pub fn from_toml_str(s: &str) -> VigilResult<Self> {
        let config: RiskConfig = toml::from_str(s).map_err(|e| VigilError::ConfigError {
            reason: format!("failed to parse risk policy TOML: {}", e),
        })?;
        Self::new(config)
    }

    /// Read the file at `path` and parse it as TOML policy configuration.
    pub fn from_file(path: &Path) -> VigilResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VigilError::ConfigError {
            reason: format!("failed to read risk policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Compute the risk score for a classification.
    ///
    /// Confidence is clamped to `[0, 1]` even though the upstream contract
    /// already bounds it; the product is floored and clamped to `[0, 100]`.
    /// Monotonically non-decreasing in confidence for a fixed category.
    pub fn score(&self, threat_type: ThreatType, confidence: f64) -> u8 {
        let severity = self.config.severity.weight(threat_type);
        let confidence = confidence.clamp(0.0, 1.0);
        let raw = (severity * confidence * 100.0).floor();
        raw.clamp(0.0, 100.0) as u8
    }

    /// Map a score to its base action under the configured thresholds.
    pub fn resolve(&self, score: u8) -> Action {
        if score >= self.config.thresholds.block {
            Action::Block
        } else if score >= self.config.thresholds.flag {
            Action::Flag
        } else {
            Action::Allow
        }
    }
}

impl RiskPolicy for WeightedRiskPolicy {
    fn assess(&self, threat_type: ThreatType, confidence: f64) -> RiskAssessment {
        let score = self.score(threat_type, confidence);
        let action = self.resolve(score);

        debug!(
            threat_type = %threat_type,
            confidence,
            score,
            action = %action,
            "risk assessed"
        );

        RiskAssessment { score, action }
    }
}
