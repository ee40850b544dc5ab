//! One-shot service availability check.

use std::time::Duration;

use tracing::warn;

use axon_client::ChatBackend;
use axon_core::types::AvailabilityStatus;

/// Upper bound on a single health probe.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe the AI backend once and report the composite status.
///
/// `ai_reachable` is true iff the probe completes successfully within
/// [`HEALTH_PROBE_TIMEOUT`]; every failure kind (timeout, DNS, connection
/// refused, HTTP error) collapses to `false` and never surfaces an error.
pub async fn check_service_availability(backend: &dyn ChatBackend) -> AvailabilityStatus {
    check_with_timeout(backend, HEALTH_PROBE_TIMEOUT).await
}

async fn check_with_timeout(backend: &dyn ChatBackend, timeout: Duration) -> AvailabilityStatus {
    let ai_reachable = match tokio::time::timeout(timeout, backend.health()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "AI backend health probe failed");
            false
        }
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs(), "AI backend health probe timed out");
            false
        }
    };

    // Database connectivity is verified server-side; this client carries the
    // field for the display contract only and does not perform a live check.
    AvailabilityStatus {
        ai_reachable,
        database_reachable: true,
        loading: false,
    }
}
