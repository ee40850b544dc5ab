//! CLI argument definitions for the Axon binary.
//!
//! Uses `clap` with derive macros. Backend endpoints and credentials come
//! from the environment (see `axon_core::config`), not from flags.

use clap::{Parser, Subcommand};

/// Axon — resilient client for a remote conversational-AI backend.
#[derive(Parser, Debug)]
#[command(name = "axon", version, about)]
pub struct CliArgs {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one chat message to a bot.
    Chat {
        /// Bot identifier.
        #[arg(long)]
        bot: String,
        /// Message text.
        message: String,
        /// Continue an existing conversation.
        #[arg(long)]
        conversation: Option<String>,
    },
    /// List the available chatbots.
    Bots,
    /// List a bot's conversations.
    Conversations {
        #[arg(long)]
        bot: String,
    },
    /// Show the messages of one conversation.
    Messages {
        #[arg(long)]
        bot: String,
        #[arg(long)]
        conversation: String,
    },
    /// Report backend availability.
    Status {
        /// Keep polling and reprint on every change instead of exiting
        /// after the first result.
        #[arg(long)]
        watch: bool,
    },
    /// Validate the resolved configuration and report issues.
    CheckConfig,
}
