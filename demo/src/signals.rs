//! Lexical signal extraction.
//!
//! Cheap indicators computed before classification: URL presence, urgency
//! language, and authority-claim language. Signals ride along into the
//! audit record; they do not feed the risk score directly.

use once_cell::sync::Lazy;
use regex::Regex;

use vigil_contracts::threat::Signal;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL pattern is valid"));

const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "now",
    "immediately",
    "hurry",
    "act fast",
    "quick",
    "deadline",
    "expire",
];

const AUTHORITY_KEYWORDS: &[&str] = &[
    "admin",
    "it team",
    "support",
    "security team",
    "ceo",
    "hr",
    "manager",
];

/// All URLs found in the message.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the indicator tags for one message.
pub fn extract_signals(text: &str) -> Vec<Signal> {
    let lower = text.to_lowercase();
    let mut signals = Vec::new();

    if URGENCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        signals.push(Signal::Urgency);
    }
    if AUTHORITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        signals.push(Signal::AuthorityClaim);
    }
    if URL_RE.is_match(text) {
        signals.push(Signal::Link);
    }

    signals
}
