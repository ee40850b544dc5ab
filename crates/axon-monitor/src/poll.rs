//! Recurring availability polling with an owned cancellation handle.
//!
//! Starting the monitor returns a [`MonitorHandle`] (the scoped resource
//! owning the polling task) and a watch receiver carrying the latest
//! [`AvailabilityStatus`]. The first probe runs immediately, then one per
//! interval; each cycle fully replaces the published value.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use axon_client::ChatBackend;
use axon_core::types::AvailabilityStatus;

use crate::probe::check_service_availability;

/// Default interval between availability polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Factory for the background polling loop.
///
/// At most one active loop per monitored endpoint is intended; starting a
/// second monitor without stopping the first leaks a polling task.
pub struct AvailabilityMonitor;

impl AvailabilityMonitor {
    /// Spawn the polling loop.
    ///
    /// The receiver starts at [`AvailabilityStatus::loading`] and observes
    /// the first real status as soon as the immediate initial probe
    /// completes. The loop ends when the handle is stopped or dropped, or
    /// when every receiver is gone.
    pub fn start(
        backend: Arc<dyn ChatBackend>,
        interval: Duration,
    ) -> (MonitorHandle, watch::Receiver<AvailabilityStatus>) {
        let (status_tx, status_rx) = watch::channel(AvailabilityStatus::loading());
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            info!(interval_secs = interval.as_secs(), "availability monitor started");

            loop {
                tokio::select! {
                    // Cancellation wins over a tick pending in the same poll.
                    biased;
                    _ = cancel_rx.changed() => break,
                    _ = ticker.tick() => {
                        let status = check_service_availability(backend.as_ref()).await;
                        debug!(
                            ai_reachable = status.ai_reachable,
                            database_reachable = status.database_reachable,
                            "availability poll complete"
                        );
                        if status_tx.send(status).is_err() {
                            // Last subscriber detached.
                            break;
                        }
                    }
                }
            }

            debug!("availability monitor stopped");
        });

        (
            MonitorHandle {
                cancel: cancel_tx,
                task,
            },
            status_rx,
        )
    }
}

/// Owned handle for the polling loop.
///
/// Stopping (or dropping) the handle guarantees that no probe fires after
/// cancellation once any in-flight cycle completes.
pub struct MonitorHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Cancel the loop and wait for it to wind down.
    pub async fn stop(self) {
        // Receiver may already be gone if the loop exited on its own.
        let _ = self.cancel.send(true);
        let _ = self.task.await;
    }

    /// Whether the polling task has already exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
