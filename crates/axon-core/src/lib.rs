//! Shared foundation for the Axon client layer.
//!
//! Holds the backend configuration, the error taxonomy used to classify
//! request failures, and the wire types exchanged with the remote
//! conversational-AI backend.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BackendConfig, ConfigReport};
pub use error::{ApiError, FailureKind, Result};
pub use types::{
    AvailabilityStatus, BotSummary, ChatReply, ChatRequest, ChatTurn, ConversationDetail,
    ConversationSummary,
};
