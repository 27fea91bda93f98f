//! # Healthbot Knowledge Base
//!
//! File: cli/src/knowledge/mod.rs
//!
//! ## Overview
//!
//! The knowledge base is the static set of question/response entries the
//! responder matches against. Each entry pairs a set of trigger keywords with
//! the candidate responses for that topic. It is loaded once at startup and
//! never mutated afterwards.
//!
//! ## Architecture
//!
//! - `KnowledgeEntry`: one keyword set + its responses
//! - `KnowledgeBase`: the ordered collection of entries
//! - `loader`: reading the JSON dataset from disk or from the copy compiled
//!   into the binary, and picking which one to use
//!
//! Entry order is preserved from the dataset; the responder pools responses
//! in this order.
//!
use crate::core::error::{HealthbotError, Result};
use serde::Deserialize;

pub mod loader;

pub use loader::{load, load_configured, DatasetSource};

/// The dataset shipped with the binary, used when nothing else is configured.
const BUILTIN_DATASET: &str = include_str!("../../data/health_dataset.json");

/// A record pairing trigger keywords with candidate responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    keywords: Vec<String>,
    responses: Vec<String>,
}

impl KnowledgeEntry {
    /// Lowercase, de-duplicated trigger keywords. Never empty. Surrounding
    /// whitespace is kept: `" ache"` only matches at the start of a word.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Candidate responses in dataset order. Never empty.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// True if any keyword occurs as a substring of `normalized`.
    ///
    /// `normalized` must already be lowercased.
    pub fn is_triggered_by(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// The full loaded collection of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

/// On-disk shape of the dataset: `{ "questions": [ { "keywords": [...], "responses": [...] } ] }`.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    questions: Vec<DatasetEntry>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct DatasetEntry {
    keywords: Vec<String>,
    responses: Vec<String>,
}

impl KnowledgeBase {
    /// Parses a JSON dataset.
    ///
    /// Keywords are lowercased but otherwise kept as written. An entry with
    /// no keywords, no responses, a blank keyword or a multi-line response is
    /// rejected, as is a dataset without entries.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(text).map_err(HealthbotError::from)?;
        Self::from_dataset(file)
    }

    /// The knowledge base compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Builds a knowledge base directly from `(keywords, responses)` pairs,
    /// applying the same normalisation and checks as the JSON loader.
    pub fn from_pairs<K, R>(pairs: impl IntoIterator<Item = (K, R)>) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let questions = pairs
            .into_iter()
            .map(|(keywords, responses)| DatasetEntry {
                keywords: keywords.into_iter().map(Into::into).collect(),
                responses: responses.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self::from_dataset(DatasetFile { questions })
    }

    fn from_dataset(file: DatasetFile) -> Result<Self> {
        if file.questions.is_empty() {
            return Err(HealthbotError::EmptyKnowledgeBase.into());
        }
        let entries = file
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, raw)| normalize_entry(index, raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Entries in dataset order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a successfully loaded knowledge base.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct keywords per entry, summed over all entries.
    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|e| e.keywords.len()).sum()
    }

    /// Total number of responses across all entries.
    pub fn response_count(&self) -> usize {
        self.entries.iter().map(|e| e.responses.len()).sum()
    }
}

fn normalize_entry(index: usize, raw: DatasetEntry) -> Result<KnowledgeEntry> {
    let invalid = |reason: &str| HealthbotError::InvalidEntry {
        index,
        reason: reason.to_string(),
    };

    if raw.keywords.is_empty() {
        return Err(invalid("no keywords").into());
    }
    if raw.responses.is_empty() {
        return Err(invalid("no responses").into());
    }

    let mut keywords: Vec<String> = Vec::with_capacity(raw.keywords.len());
    for keyword in raw.keywords {
        // A blank keyword is a substring of every utterance.
        if keyword.trim().is_empty() {
            return Err(invalid("blank keyword").into());
        }
        let keyword = keyword.to_lowercase();
        if !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }

    // One response must stay one transcript line.
    if raw.responses.iter().any(|r| r.contains(|c| c == '\n' || c == '\r')) {
        return Err(invalid("response spans several lines").into());
    }

    Ok(KnowledgeEntry {
        keywords,
        responses: raw.responses,
    })
}
