//! Error types for the vigil decision pipeline.
//!
//! The pipeline is fail-open with respect to availability: classifier and
//! audit failures are recovered locally and never abort a decision. The
//! only variant that reaches external callers is `InvalidInput`.

use thiserror::Error;

/// The unified error type for the vigil runtime.
#[derive(Debug, Error)]
pub enum VigilError {
    /// The request payload failed validation (empty or oversized message).
    ///
    /// This is the only error class surfaced to the caller of `decide()`.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The classifier boundary failed or returned unusable output.
    ///
    /// The orchestrator downgrades this to a benign/zero-confidence verdict
    /// rather than propagating it.
    #[error("classifier failed: {reason}")]
    ClassifierFailed { reason: String },

    /// The event store could not persist an audit record.
    ///
    /// Appends are best-effort: the orchestrator logs this and continues.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the vigil crates.
pub type VigilResult<T> = Result<T, VigilError>;
