//! # Healthbot Terminal Surface
//!
//! File: cli/src/session/terminal.rs
//!
//! ## Overview
//!
//! Renders the transcript as labelled plain-text lines on any `Write`
//! (stdout in the binary, a `Vec<u8>` in tests):
//!
//! ```text
//! You: I have a headache
//! Bot: Rest in a quiet, dark room for a while.
//! Drink a glass of water; dehydration is a common cause of headaches.
//!
//! ```
//!
//! In interactive mode the user's own line is already on screen (they typed
//! it after the prompt), so user lines are not echoed again.
//!
use super::{DisplaySurface, Speaker};
use crate::core::config::ChatConfig;
use crate::core::error::{HealthbotError, Result};
use std::io::Write;

/// Plain-text transcript renderer.
pub struct TerminalSurface<W: Write> {
    out: W,
    user_label: String,
    bot_label: String,
    interactive: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, user_label: impl Into<String>, bot_label: impl Into<String>) -> Self {
        Self {
            out,
            user_label: user_label.into(),
            bot_label: bot_label.into(),
            interactive: false,
        }
    }

    /// Builds a surface using the labels from the `[chat]` configuration.
    pub fn from_config(out: W, config: &ChatConfig) -> Self {
        Self::new(out, config.user_label.as_str(), config.bot_label.as_str())
    }

    /// Interactive surfaces print a prompt and skip echoing user lines.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| HealthbotError::Display(e.to_string()).into())
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn append_line(&mut self, speaker: Speaker, text: &str) -> Result<()> {
        match speaker {
            Speaker::User if self.interactive => Ok(()),
            Speaker::User => {
                let line = format!("{}: {}\n", self.user_label, text);
                self.write(&line)
            }
            Speaker::Bot => {
                // Blank line after each bot entry separates exchanges.
                let line = format!("{}: {}\n\n", self.bot_label, text);
                self.write(&line)
            }
        }
    }

    fn prompt(&mut self) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        let prompt = format!("{}: ", self.user_label);
        self.write(&prompt)
    }

    fn input_closed(&mut self) -> Result<()> {
        // Finish the line the prompt was left on.
        if self.interactive {
            self.write("\n")
        } else {
            Ok(())
        }
    }
}
