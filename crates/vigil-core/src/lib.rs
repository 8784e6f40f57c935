//! # vigil-core
//!
//! The deterministic decision pipeline for the vigil triage runtime.
//!
//! This crate provides:
//! - The three trait seams (`Classifier`, `RiskPolicy`, `EventStore`)
//! - The message fingerprint (the join key between trail and requests)
//! - The memory/escalation engine (sliding-window repeat detection)
//! - The `Orchestrator` that wires one request through the pipeline
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vigil_core::{Orchestrator, EscalationEngine};
//! use vigil_core::traits::{Classifier, EventStore, RiskPolicy};
//!
//! let orchestrator = Orchestrator::new(classifier, policy, store, EscalationEngine::default());
//! let decision = orchestrator.decide("check out http://example.test", &signals)?;
//! ```

pub mod escalation;
pub mod fingerprint;
pub mod orchestrator;
pub mod traits;

pub use escalation::EscalationEngine;
pub use fingerprint::fingerprint;
pub use orchestrator::{Orchestrator, MAX_MESSAGE_CHARS};
