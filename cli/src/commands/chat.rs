//! # Healthbot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `healthbot chat` (also the default when no subcommand is given) runs the
//! read-eval-respond loop on stdin/stdout.
//!
//! When stdin is a terminal the user's label is shown as a prompt and typed
//! lines are not echoed back. When stdin is piped every exchange is written
//! out in full, which makes the command usable for scripted transcripts:
//!
//! ```bash
//! printf 'I have a fever\nbye\n' | healthbot chat
//! ```
//!
use super::startup;
use clap::Parser;
use healthbot::core::error::Result;
use healthbot::responder::Responder;
use healthbot::session::{run_repl, ChatSession, TerminalSurface};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug, Default)]
pub struct ChatArgs {}

pub fn handle_chat(_args: ChatArgs, dataset: Option<&Path>) -> Result<()> {
    let startup = startup(dataset)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(
        "Starting chat with {} (interactive: {})",
        startup.source, interactive
    );

    let surface = TerminalSurface::from_config(io::stdout().lock(), &startup.config.chat)
        .interactive(interactive);
    let mut session = ChatSession::new(Responder::new(&startup.kb), surface);
    run_repl(&mut session, stdin.lock(), &startup.config.chat.quit_words)?;
    Ok(())
}
