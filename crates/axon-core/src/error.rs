//! Error taxonomy for outbound backend calls.
//!
//! Every failure carries a [`FailureKind`] classification that drives the
//! retry and fallback policy: transient network failures and explicit
//! service-unavailable responses are retryable (and convertible to a degraded
//! fallback reply on chat calls), client and unclassified server errors are
//! surfaced as-is.

use thiserror::Error;

/// Failures from outbound calls to the AI backend or gateway.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Deserialize(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a failure, per the propagation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Timeout, connection refused, or other transport-level failure.
    TransientNetwork,
    /// The remote explicitly reported itself unavailable.
    ServiceUnavailable,
    /// Malformed request, authorization failure, bad configuration.
    ClientError,
    /// Any other server-side failure, including undecodable bodies.
    ServerError,
}

impl ApiError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Timeout(_) | ApiError::ConnectionRefused(_) | ApiError::Transport(_) => {
                FailureKind::TransientNetwork
            }
            ApiError::ServiceUnavailable(_) => FailureKind::ServiceUnavailable,
            ApiError::Client { .. } | ApiError::Config(_) => FailureKind::ClientError,
            ApiError::Server { .. } | ApiError::Deserialize(_) => FailureKind::ServerError,
        }
    }

    /// Whether reattempting the same operation may succeed without caller
    /// intervention.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::TransientNetwork | FailureKind::ServiceUnavailable
        )
    }

    /// Whether an exhausted chat call may be converted into a degraded
    /// fallback reply instead of an error.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::TransientNetwork | FailureKind::ServiceUnavailable
        )
    }
}

/// A specialized `Result` type for Axon operations.
pub type Result<T> = std::result::Result<T, ApiError>;
