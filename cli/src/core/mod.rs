//! # Healthbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the knowledge base,
//! the responder and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{HealthbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
