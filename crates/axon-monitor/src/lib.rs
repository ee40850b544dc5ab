//! Availability monitoring for the Axon client layer.
//!
//! Periodically probes the AI backend's health endpoint and publishes a
//! composite [`axon_core::types::AvailabilityStatus`] over a watch channel
//! that the status display subscribes to.

pub mod poll;
pub mod probe;

pub use poll::{AvailabilityMonitor, MonitorHandle, DEFAULT_POLL_INTERVAL};
pub use probe::{check_service_availability, HEALTH_PROBE_TIMEOUT};
