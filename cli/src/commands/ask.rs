//! # Healthbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `healthbot ask <UTTERANCE>...` answers a single utterance and prints the
//! reply (up to three lines, or the fallback message) to stdout. The words
//! are joined with single spaces, so quoting is optional.
//!
//! ```bash
//! healthbot ask I have a headache
//! healthbot --dataset ./kb.json ask "what helps a cough?"
//! ```
//!
use super::startup;
use clap::Parser;
use healthbot::core::error::Result;
use healthbot::responder::Responder;
use std::path::Path;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer.
    #[arg(required = true, num_args = 1..)]
    pub utterance: Vec<String>,
}

pub fn handle_ask(args: AskArgs, dataset: Option<&Path>) -> Result<()> {
    let startup = startup(dataset)?;
    let utterance = args.utterance.join(" ");
    let responder = Responder::new(&startup.kb);

    debug!(
        "Entries triggered by {:?}: {:?}",
        utterance,
        responder.matching_entries(&utterance)
    );
    println!("{}", responder.respond(&utterance));
    Ok(())
}
