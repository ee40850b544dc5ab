//! Bounded retry with a fixed inter-attempt delay.
//!
//! Attempts are sequential, never concurrent for the same logical call, and
//! each call owns its local attempt counter. The delay is fixed; there is no
//! exponential backoff and no jitter.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use axon_core::error::Result;

/// Constant retry configuration, not per-call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, initial call included. Always at least 1.
    pub max_attempts: u32,
    /// Fixed wait between attempts. No jitter.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy, clamping `max_attempts` to at least 1.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

/// Invoke `operation`, retrying retryable failures up to
/// `policy.max_attempts` total attempts with a fixed delay in between.
///
/// Non-retryable failures (client errors, unclassified server errors) are
/// returned immediately. After exhaustion the final failure is propagated
/// unchanged.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && e.is_retryable() => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "request failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
