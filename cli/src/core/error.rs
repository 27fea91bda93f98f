//! # Healthbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Healthbot. Only one
//! class of failure is fatal: the knowledge base (or the configuration that
//! points at it) cannot be loaded at startup. Once the knowledge base is in
//! memory the responder cannot fail; an utterance that matches nothing is
//! answered with the fallback string and never surfaces as an error.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HealthbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Dataset resolution and parsing errors
//! - Dataset content errors (entries that break the knowledge base invariants)
//! - Display surface write failures
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(HealthbotError::DatasetNotFound { path: path.to_path_buf() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let text = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Healthbot application.
#[derive(Error, Debug)]
pub enum HealthbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset not found at '{}'.", .path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("Dataset is not valid JSON for the knowledge base format: {source}")]
    DatasetMalformed {
        #[from]
        source: serde_json::Error,
    },

    #[error("Dataset entry #{index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Dataset contains no entries.")]
    EmptyKnowledgeBase,

    #[error("Display error: {0}")]
    Display(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
