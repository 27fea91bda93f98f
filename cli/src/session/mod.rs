//! # Healthbot Chat Session
//!
//! File: cli/src/session/mod.rs
//!
//! ## Overview
//!
//! Connects a display surface to the responder. The display surface is
//! whatever renders the transcript (a terminal, a GUI text widget, a test
//! recorder); the session only needs it to append speaker-tagged lines.
//!
//! Every UI trigger (enter key, send button, a line read from a pipe) is
//! funnelled through the single [`ChatSession::submit`] capability.
//!
//! ## Architecture
//!
//! - `Speaker`: who a transcript line belongs to
//! - `DisplaySurface`: trait implemented by transcript renderers
//! - `Transcript`: in-memory display surface
//! - `ChatSession`: responder + surface, exposes `submit`
//! - `terminal`: `TerminalSurface`, the stdout renderer
//! - `repl`: the read-eval-respond loop over a `BufRead`
//!
use crate::core::error::Result;
use crate::responder::Responder;
use tracing::debug;

pub mod repl;
pub mod terminal;

pub use repl::run_repl;
pub use terminal::TerminalSurface;

/// Who a transcript line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    User,
    Bot,
}

/// Renders the chat transcript.
pub trait DisplaySurface {
    /// Appends one speaker-tagged entry to the transcript. `text` may span
    /// several lines.
    fn append_line(&mut self, speaker: Speaker, text: &str) -> Result<()>;

    /// Called when the surface should invite the next utterance.
    fn prompt(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when input ends while a prompt is showing.
    fn input_closed(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn append_line(&mut self, speaker: Speaker, text: &str) -> Result<()> {
        (**self).append_line(speaker, text)
    }

    fn prompt(&mut self) -> Result<()> {
        (**self).prompt()
    }

    fn input_closed(&mut self) -> Result<()> {
        (**self).input_closed()
    }
}

/// A display surface that keeps the transcript in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<(Speaker, String)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Speaker, String)] {
        &self.lines
    }
}

impl DisplaySurface for Transcript {
    fn append_line(&mut self, speaker: Speaker, text: &str) -> Result<()> {
        self.lines.push((speaker, text.to_string()));
        Ok(())
    }
}

/// A single-user chat: answers submitted utterances and records both sides
/// on the display surface.
pub struct ChatSession<'kb, D: DisplaySurface> {
    responder: Responder<'kb>,
    surface: D,
}

impl<'kb, D: DisplaySurface> ChatSession<'kb, D> {
    pub fn new(responder: Responder<'kb>, surface: D) -> Self {
        Self { responder, surface }
    }

    /// # Submit Utterance (`submit`)
    ///
    /// Handles one submit event. Blank or whitespace-only input is ignored and
    /// yields `Ok(None)` with nothing appended. Otherwise the utterance and the
    /// reply are appended to the surface, in that order, and the reply is
    /// returned.
    ///
    /// ## Returns
    ///
    /// * `Err` only if the display surface fails to render.
    pub fn submit(&mut self, utterance: &str) -> Result<Option<String>> {
        if utterance.trim().is_empty() {
            debug!("Ignoring blank utterance");
            return Ok(None);
        }
        self.surface.append_line(Speaker::User, utterance)?;
        let reply = self.responder.respond(utterance);
        self.surface.append_line(Speaker::Bot, &reply)?;
        Ok(Some(reply))
    }

    /// Appends a bot line that did not come from the responder (greetings,
    /// farewells).
    pub fn announce(&mut self, text: &str) -> Result<()> {
        self.surface.append_line(Speaker::Bot, text)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }
}
