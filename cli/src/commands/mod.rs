//! # Healthbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `healthbot` binary and the
//! startup step they share: loading the configuration and the knowledge base.
//!
//! ## Commands
//!
//! - `chat`: Interactive transcript on stdin/stdout (default)
//! - `ask`: One-shot question, reply printed to stdout
//! - `check`: Load the dataset and print a summary
//!
//! Each command defines its own arguments structure and handler function.
//!
use anyhow::Context;
use healthbot::core::config::{self, Config};
use healthbot::core::error::Result;
use healthbot::knowledge::{self, DatasetSource, KnowledgeBase};
use std::path::Path;

/// One-shot question answering.
pub mod ask;
/// Interactive chat loop.
pub mod chat;
/// Dataset validation and summary.
pub mod check;

/// Everything a command needs once startup has succeeded.
pub struct Startup {
    pub config: Config,
    pub kb: KnowledgeBase,
    pub source: DatasetSource,
}

/// # Load Startup State (`startup`)
///
/// Loads the merged configuration, then the knowledge base it points to
/// (or `dataset` when given). Any error here is fatal for the process.
pub fn startup(dataset: Option<&Path>) -> Result<Startup> {
    let config = config::load_config().context("Failed to load Healthbot configuration")?;
    let (kb, source) = knowledge::load_configured(dataset, &config.knowledge)?;
    Ok(Startup { config, kb, source })
}
