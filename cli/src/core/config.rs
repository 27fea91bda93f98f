//! # Healthbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Healthbot, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.healthbot.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/healthbot/config.toml`
//! 3. Default values defined in the code
//!
//! The `--dataset` flag (or `HEALTHBOT_DATASET`) takes precedence over
//! everything here; that override is applied by the knowledge loader, not by
//! this module.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//!
//! // Where the knowledge base lives (None = built-in dataset)
//! let dataset = cfg.knowledge.dataset.as_deref();
//!
//! // Transcript labels
//! let label = &cfg.chat.bot_label;
//! ```
//!
use crate::core::error::{HealthbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration handed to the rest of the application.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub knowledge: KnowledgeConfig,
    pub chat: ChatConfig,
}

/// Where the knowledge base dataset is read from.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Path to a JSON dataset (can use ~). When absent, the dataset compiled
    /// into the binary is used.
    pub dataset: Option<String>,
}

/// Settings for the interactive transcript (`healthbot chat`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Label printed in front of user lines.
    pub user_label: String,
    /// Label printed in front of bot lines.
    pub bot_label: String,
    /// Lines that end the session (compared case-insensitively).
    pub quit_words: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            bot_label: default_bot_label(),
            quit_words: default_quit_words(),
        }
    }
}

/// One configuration file as written on disk. Every field is optional so a
/// value set explicitly (even to its default) can be told apart from one
/// left out.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct ConfigFile {
    #[serde(default)]
    knowledge: KnowledgeConfig,
    #[serde(default)]
    chat: ChatFile,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct ChatFile {
    user_label: Option<String>,
    bot_label: Option<String>,
    quit_words: Option<Vec<String>>,
}

fn default_user_label() -> String {
    "You".to_string()
}
fn default_bot_label() -> String {
    "Bot".to_string()
}
fn default_quit_words() -> Vec<String> {
    vec!["bye".to_string(), "exit".to_string(), "quit".to_string()]
}

const PROJECT_CONFIG_FILENAME: &str = ".healthbot.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Healthbot", "healthbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.healthbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.healthbot.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values; anything neither file sets falls
/// back to the built-in default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    Config {
        knowledge: KnowledgeConfig {
            dataset: project.knowledge.dataset.or(user.knowledge.dataset),
        },
        chat: ChatConfig {
            user_label: project
                .chat
                .user_label
                .or(user.chat.user_label)
                .unwrap_or_else(default_user_label),
            bot_label: project
                .chat
                .bot_label
                .or(user.chat.bot_label)
                .unwrap_or_else(default_bot_label),
            quit_words: project
                .chat
                .quit_words
                .or(user.chat.quit_words)
                .unwrap_or_else(default_quit_words),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dataset) = config.knowledge.dataset.as_mut() {
        *dataset = shellexpand::tilde(dataset.as_str()).into_owned();
        debug!("Expanded dataset path: {}", dataset);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(dataset) = &config.knowledge.dataset {
        let path = PathBuf::from(dataset);
        if path.is_dir() {
            return Err(anyhow!(HealthbotError::Config(format!(
                "Configured dataset path '{}' is a directory, expected a JSON file.",
                path.display()
            ))));
        }
        if !path.exists() {
            // Not fatal here; the loader reports it if this path is actually used.
            warn!("Configured dataset '{}' does not exist.", path.display());
        }
    }
    if config.chat.user_label.trim().is_empty() || config.chat.bot_label.trim().is_empty() {
        return Err(anyhow!(HealthbotError::Config(
            "Chat labels cannot be empty.".to_string()
        )));
    }
    if config.chat.quit_words.iter().any(|w| w.trim().is_empty()) {
        return Err(anyhow!(HealthbotError::Config(
            "Quit words cannot be empty strings.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
