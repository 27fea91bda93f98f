//! # Healthbot Read-Eval-Respond Loop
//!
//! File: cli/src/session/repl.rs
//!
//! ## Overview
//!
//! Reads utterances line by line from any `BufRead` and submits each one to
//! the chat session. The loop ends at end of input or when a line matches
//! one of the quit words (trimmed, case-insensitive). Either way the user
//! gets a farewell line.
//!
use super::{ChatSession, DisplaySurface};
use crate::core::error::Result;
use anyhow::Context;
use std::io::BufRead;
use tracing::{debug, info};

/// Shown once before the first prompt.
pub const GREETING: &str = "Hello! Ask me a health question.";
/// Shown when the session ends.
pub const FAREWELL: &str = "Take care, and see a doctor if you're worried.";

/// How a REPL run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    /// The user typed a quit word.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

/// Summary of a finished REPL run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    pub exit: ReplExit,
    /// Number of utterances that produced a reply.
    pub answered: usize,
}

/// # Run REPL (`run_repl`)
///
/// Greets the user, then reads lines from `input` until a quit word or end of
/// input, handing each line to [`ChatSession::submit`].
///
/// ## Arguments
///
/// * `session`: The chat session to drive.
/// * `input`: Source of utterances, one per line.
/// * `quit_words`: Lines that end the session.
///
/// ## Returns
///
/// * `Ok(ReplSummary)` describing how the loop ended.
/// * `Err` if reading input or rendering to the display surface fails.
pub fn run_repl<D, R>(
    session: &mut ChatSession<'_, D>,
    input: R,
    quit_words: &[String],
) -> Result<ReplSummary>
where
    D: DisplaySurface,
    R: BufRead,
{
    let quit_hint = quit_words
        .first()
        .map(|w| format!(" Type '{}' to quit.", w))
        .unwrap_or_default();
    session.announce(&format!("{GREETING}{quit_hint}"))?;

    let mut answered = 0;
    let mut lines = input.lines();
    let exit = loop {
        session.surface_mut().prompt()?;
        let Some(line) = lines.next() else {
            debug!("Input exhausted, leaving chat loop");
            session.surface_mut().input_closed()?;
            session.announce(FAREWELL)?;
            break ReplExit::EndOfInput;
        };
        let line = line.context("Failed to read input line")?;

        if is_quit_word(&line, quit_words) {
            session.announce(FAREWELL)?;
            break ReplExit::Quit;
        }
        if session.submit(&line)?.is_some() {
            answered += 1;
        }
    };

    info!("Chat session ended ({:?}) after {} replies", exit, answered);
    Ok(ReplSummary { exit, answered })
}

fn is_quit_word(line: &str, quit_words: &[String]) -> bool {
    let line = line.trim().to_lowercase();
    quit_words.iter().any(|w| w.trim().to_lowercase() == line)
}
