//! Message fingerprinting.
//!
//! The fingerprint is the join key between audit records and new requests:
//! the trail stores it instead of the raw text, and the escalation engine
//! counts repeats by comparing it. One-way by construction — the digest
//! reveals nothing about the message.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 fingerprint of a message.
///
/// Hashes the exact UTF-8 bytes — no case folding, no whitespace
/// normalization. Two byte-identical messages always produce the same
/// digest; any difference produces a different one.
///
/// Returns a lowercase 64-character hex string.
pub fn fingerprint(message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    hex::encode(hasher.finalize())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
