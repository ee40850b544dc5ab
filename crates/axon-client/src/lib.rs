//! Resilient request engine for the Axon client layer.
//!
//! Wraps outbound calls to the conversational-AI backend with bounded
//! fixed-delay retry, converts exhausted service-unavailable failures on
//! chat calls into canned fallback replies, and hands list/read failures
//! back to the UI as empty-shaped defaults plus a user-facing notification.

pub mod api;
pub mod backend;
pub mod fallback;
pub mod retry;

pub use api::{ApiClient, Notifier, TracingNotifier};
pub use backend::{ChatBackend, HttpBackend};
pub use fallback::{
    new_fallback_conversation_id, record_fallback_usage, select_fallback, FallbackRule,
    DEFAULT_FALLBACK, FALLBACK_RULES,
};
pub use retry::{with_retry, RetryPolicy};
