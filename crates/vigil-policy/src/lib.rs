//! # vigil-policy
//!
//! The weighted risk scorer and threshold-based action resolver for the
//! vigil triage runtime.
//!
//! ## Overview
//!
//! This crate provides [`WeightedRiskPolicy`], which implements the
//! [`RiskPolicy`](vigil_core::traits::RiskPolicy) trait. Each threat
//! category carries a fixed severity weight; the score is the floored
//! product of severity, confidence, and 100, and fixed thresholds map it
//! to an action. Defaults match the shipped constants; a TOML document can
//! override either table.

pub mod config;
pub mod engine;

pub use config::{ActionThresholds, RiskConfig, SeverityWeights};
pub use engine::WeightedRiskPolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────
