//! Canned fallback replies for when the remote AI backend is unreachable.
//!
//! A small static rule table maps inbound message text to a response; the
//! scan is case-insensitive, in table order, first matching rule wins.

use chrono::Utc;
use rand::Rng;
use tracing::warn;

/// One entry in the fallback rule table.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    /// A rule matches if any keyword is a case-insensitive substring of the
    /// message. Keywords are stored lowercase.
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Ordered rule table. Earlier rules win over later ones.
pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["hello", "hi", "hey", "greetings"],
        response: "Hello there! I'm currently operating in fallback mode due to \
                   connectivity issues. I can only provide basic responses right now.",
    },
    FallbackRule {
        keywords: &["help", "support", "assist"],
        response: "I'd like to help, but I'm currently in fallback mode due to \
                   connectivity issues. Please try again later or contact support \
                   if this persists.",
    },
];

/// Reply for messages matching no rule.
pub const DEFAULT_FALLBACK: &str = "I'm sorry, I'm currently experiencing connectivity \
                                    issues and can't provide a detailed response. Please \
                                    try again later.";

/// Pick the canned reply for `message`.
///
/// Deterministic and free of I/O; scans O(rules x keywords) per call.
pub fn select_fallback(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    for rule in FALLBACK_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            return rule.response;
        }
    }
    DEFAULT_FALLBACK
}

/// Generate a conversation id for a fallback reply when the caller supplied
/// none: epoch-millis prefix plus a random suffix.
///
/// Unique within a process run with overwhelming probability; purely for
/// correlating UI turns, never for security decisions.
pub fn new_fallback_conversation_id() -> String {
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("fallback-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Observability hook fired when a fallback reply is served.
///
/// Fire-and-forget: failure to record can never affect the caller.
pub fn record_fallback_usage(bot_id: &str, message: &str) {
    warn!(bot_id, message, "fallback mode activated");
}
