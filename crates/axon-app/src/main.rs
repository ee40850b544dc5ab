//! Axon binary - composition root.
//!
//! Ties the library crates together into one executable:
//! 1. Resolve `BackendConfig` from the environment
//! 2. Report (but never crash on) validation issues
//! 3. Wire the reqwest backend into the resilient `ApiClient`
//! 4. Dispatch the requested subcommand, including the availability
//!    monitor behind the `status` display boundary

mod cli;
mod display;

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use axon_client::{ApiClient, ChatBackend, HttpBackend};
use axon_core::config::BackendConfig;
use axon_monitor::{AvailabilityMonitor, DEFAULT_POLL_INTERVAL};

use cli::{CliArgs, Command};
use display::render_status;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Arc::new(BackendConfig::from_env());
    let report = config.validate();
    for issue in &report.issues {
        warn!(issue = %issue, "configuration issue");
    }

    if let Command::CheckConfig = args.command {
        if report.valid {
            println!("configuration OK");
        } else {
            for issue in &report.issues {
                println!("issue: {issue}");
            }
            process::exit(1);
        }
        return;
    }

    let backend: Arc<dyn ChatBackend> = match HttpBackend::new(Arc::clone(&config)) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(1);
        }
    };
    let client = ApiClient::new(Arc::clone(&backend), Arc::clone(&config));

    match args.command {
        Command::Chat {
            bot,
            message,
            conversation,
        } => match client
            .send_chat_message(&bot, &message, conversation.as_deref())
            .await
        {
            Ok(reply) => {
                let marker = if reply.is_fallback { " [fallback]" } else { "" };
                println!("{}{}", reply.message, marker);
                println!("conversation: {}", reply.conversation_id);
            }
            Err(e) => {
                eprintln!("chat failed: {e}");
                process::exit(1);
            }
        },

        Command::Bots => {
            for bot in client.get_bots().await {
                match bot.description {
                    Some(desc) => println!("{}  {}  {desc}", bot.id, bot.name),
                    None => println!("{}  {}", bot.id, bot.name),
                }
            }
        }

        Command::Conversations { bot } => {
            for conversation in client.get_conversations(&bot).await {
                let title = conversation.title.as_deref().unwrap_or("(untitled)");
                println!("{}  {title}", conversation.id);
            }
        }

        Command::Messages { bot, conversation } => {
            let detail = client.get_conversation_messages(&bot, &conversation).await;
            for turn in detail.messages {
                println!("{}: {}", turn.role, turn.content);
            }
        }

        Command::Status { watch } => run_status(backend, watch).await,

        Command::CheckConfig => unreachable!("handled above"),
    }
}

/// Drive the availability monitor and render its output until the first
/// result (or until Ctrl-C in watch mode).
async fn run_status(backend: Arc<dyn ChatBackend>, watch: bool) {
    let (handle, mut rx) = AvailabilityMonitor::start(backend, DEFAULT_POLL_INTERVAL);
    let initial = *rx.borrow_and_update();
    println!("{}", render_status(&initial));

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = *rx.borrow_and_update();
                println!("{}", render_status(&status));
                if !watch {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop().await;
}
