//! # Healthbot Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Keyword-matching health Q&A. The library holds everything except argument
//! parsing, so the `healthbot` binary and the integration tests share one
//! implementation:
//!
//! - `core`: configuration and error types
//! - `knowledge`: the knowledge base and its JSON loader
//! - `responder`: reply selection for one utterance
//! - `session`: display surfaces, the chat session and the input loop
//!
pub mod core;
pub mod knowledge;
pub mod responder;
pub mod session;
