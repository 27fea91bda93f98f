//! # Healthbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate, so
//! helpers live here and are pulled in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small dataset used across the CLI tests.
pub const HEADACHE_DATASET: &str = r#"{
  "questions": [
    { "keywords": ["headache"], "responses": ["Drink water", "Rest", "See a doctor"] },
    { "keywords": ["cough"], "responses": ["Honey and lemon"] }
  ]
}"#;

pub const FALLBACK: &str =
    "I'm sorry, I don't have information on that. Please consult a doctor.";

/// # Get Healthbot Command (`healthbot_cmd`)
///
/// `assert_cmd::Command` for the compiled `healthbot` binary, isolated from
/// the developer's environment: it runs inside `sandbox`, with `HOME` and
/// `XDG_CONFIG_HOME` pointed into it and `HEALTHBOT_DATASET` cleared, so no
/// real configuration file or dataset override leaks into the test.
///
/// ## Panics
/// Panics if the `healthbot` binary cannot be found via `Command::cargo_bin`.
pub fn healthbot_cmd(sandbox: &Path) -> Command {
    let mut cmd = Command::cargo_bin("healthbot").expect("Failed to find healthbot binary for testing");
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env_remove("HEALTHBOT_DATASET")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a sandbox directory containing `kb.json` with `contents`.
pub fn sandbox_with_dataset(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
    let path = dir.path().join("kb.json");
    fs::write(&path, contents).expect("Failed to write dataset");
    (dir, path)
}
