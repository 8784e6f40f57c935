//! Risk policy configuration schema.
//!
//! A `RiskConfig` is deserialized from TOML and holds the per-category
//! severity weights and the score thresholds. Every field defaults to the
//! shipped constants, so a partial document only overrides what it names
//! and an absent document means stock behavior.

use serde::{Deserialize, Serialize};

use vigil_contracts::{
    error::{VigilError, VigilResult},
    threat::ThreatType,
};

/// Per-category severity weights in `[0.0, 1.0]`.
///
/// Example in TOML:
/// ```toml
/// [severity]
/// phishing = 1.0
/// scam = 0.8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub phishing: f64,
    pub malware: f64,
    pub scam: f64,
    pub impersonation: f64,
    pub prompt_injection: f64,
    pub benign: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            phishing: 1.0,
            malware: 1.0,
            scam: 0.8,
            impersonation: 0.8,
            prompt_injection: 0.7,
            benign: 0.0,
        }
    }
}

impl SeverityWeights {
    /// The weight for a threat category.
    pub fn weight(&self, threat_type: ThreatType) -> f64 {
        match threat_type {
            ThreatType::Phishing => self.phishing,
            ThreatType::Malware => self.malware,
            ThreatType::Scam => self.scam,
            ThreatType::Impersonation => self.impersonation,
            ThreatType::PromptInjection => self.prompt_injection,
            ThreatType::Benign => self.benign,
        }
    }
}

/// Score thresholds, evaluated high-to-low: `score >= block` blocks,
/// `score >= flag` flags, anything lower is allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionThresholds {
    pub block: u8,
    pub flag: u8,
}

impl Default for ActionThresholds {
    fn default() -> Self {
        Self { block: 80, flag: 50 }
    }
}

/// The top-level structure deserialized from a TOML policy file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub severity: SeverityWeights,
    pub thresholds: ActionThresholds,
}

impl RiskConfig {
    /// Reject configurations whose thresholds are inverted.
    ///
    /// `flag > block` would make the flag band unreachable from above and
    /// is always a configuration mistake.
    pub fn validate(&self) -> VigilResult<()> {
        if self.thresholds.flag > self.thresholds.block {
            return Err(VigilError::ConfigError {
                reason: format!(
                    "flag threshold {} exceeds block threshold {}",
                    self.thresholds.flag, self.thresholds.block
                ),
            });
        }
        Ok(())
    }
}
