//! # Healthbot Knowledge Base Loader
//!
//! File: cli/src/knowledge/loader.rs
//!
//! ## Overview
//!
//! Resolves which dataset to use and reads it into a `KnowledgeBase`.
//! Any failure here is fatal for the process: there is no degraded mode
//! without a knowledge base.
//!
//! Resolution order:
//! 1. Explicit path (`--dataset` flag or `HEALTHBOT_DATASET`)
//! 2. `knowledge.dataset` from the configuration files
//! 3. The dataset compiled into the binary
//!
use super::KnowledgeBase;
use crate::core::config::KnowledgeConfig;
use crate::core::error::{HealthbotError, Result};
use anyhow::Context;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Where a loaded knowledge base came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Builtin => write!(f, "built-in dataset"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// # Load Dataset File (`load`)
///
/// Reads and parses the JSON dataset at `path`.
///
/// ## Returns
///
/// * `Ok(KnowledgeBase)` on success.
/// * `Err` wrapping `HealthbotError::DatasetNotFound` if the file does not exist,
///   or the read/parse/validation error with the path attached as context.
pub fn load(path: &Path) -> Result<KnowledgeBase> {
    if !path.exists() {
        return Err(HealthbotError::DatasetNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    debug!("Reading dataset from {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    KnowledgeBase::from_json_str(&text)
        .with_context(|| format!("Failed to load knowledge base from {}", path.display()))
}

/// # Load Configured Knowledge Base (`load_configured`)
///
/// Picks the dataset according to the resolution order above and loads it.
///
/// ## Arguments
///
/// * `explicit`: Path given on the command line or via `HEALTHBOT_DATASET`.
/// * `config`: The `[knowledge]` section of the merged configuration.
pub fn load_configured(
    explicit: Option<&Path>,
    config: &KnowledgeConfig,
) -> Result<(KnowledgeBase, DatasetSource)> {
    let source = match (explicit, config.dataset.as_deref()) {
        (Some(path), _) => DatasetSource::File(path.to_path_buf()),
        (None, Some(configured)) => DatasetSource::File(PathBuf::from(configured)),
        (None, None) => DatasetSource::Builtin,
    };

    let kb = match &source {
        DatasetSource::Builtin => {
            KnowledgeBase::builtin().context("Built-in dataset failed to load")?
        }
        DatasetSource::File(path) => load(path)?,
    };

    info!(
        "Loaded {} knowledge base entries ({} responses) from {}",
        kb.len(),
        kb.response_count(),
        source
    );
    Ok((kb, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str =
        r#"{"questions": [{"keywords": ["headache"], "responses": ["Drink water", "Rest"]}]}"#;

    #[test]
    fn load_missing_file_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HealthbotError>(),
            Some(HealthbotError::DatasetNotFound { .. })
        ));
    }

    #[test]
    fn load_reports_path_for_bad_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(err
            .chain()
            .any(|cause| cause.downcast_ref::<HealthbotError>().is_some()));
    }

    #[test]
    fn explicit_path_wins_over_config() {
        let temp_dir = tempdir().unwrap();
        let explicit = temp_dir.path().join("explicit.json");
        fs::write(&explicit, SAMPLE).unwrap();
        let config = KnowledgeConfig {
            dataset: Some(temp_dir.path().join("other.json").to_string_lossy().into()),
        };

        let (kb, source) = load_configured(Some(&explicit), &config).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(source, DatasetSource::File(explicit));
    }

    #[test]
    fn configured_path_used_without_override() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("kb.json");
        fs::write(&path, SAMPLE).unwrap();
        let config = KnowledgeConfig {
            dataset: Some(path.to_string_lossy().into()),
        };

        let (_, source) = load_configured(None, &config).unwrap();
        assert_eq!(source, DatasetSource::File(path));
    }

    #[test]
    fn falls_back_to_builtin() {
        let (kb, source) = load_configured(None, &KnowledgeConfig::default()).unwrap();
        assert_eq!(source, DatasetSource::Builtin);
        assert!(!kb.is_empty());
        assert_eq!(source.to_string(), "built-in dataset");
    }
}
