//! Disease knowledge base.
//!
//! An ordered, read-only table of `(keyword, info)` pairs plus a fallback block.
//! The table is built once at startup, either from the built-in entries or from
//! a JSON file, and is never mutated afterwards.
//!
//! # File format
//!
//! ```json
//! {
//!   "entries": [
//!     { "keyword": "diabetes", "info": "**Diabetes Mellitus** ..." }
//!   ],
//!   "fallback": "**General Health Information** ..."
//! }
//! ```
//!
//! Keywords are lowercased on load. Entry order is preserved and decides which
//! entry wins when a prompt mentions more than one keyword.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when building a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// IO error reading the knowledge file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid knowledge base JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry has an empty (or whitespace-only) keyword.
    #[error("entry {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    /// An entry has no information text.
    #[error("entry {keyword:?} has empty info text")]
    EmptyInfo { keyword: String },

    /// Two entries share a keyword after lowercasing.
    #[error("duplicate keyword {0:?}")]
    DuplicateKeyword(String),

    /// The fallback block is empty.
    #[error("fallback text is empty")]
    EmptyFallback,
}

/// Result type for knowledge base operations.
pub type Result<T> = std::result::Result<T, KnowledgeError>;

/// A single disease entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEntry {
    /// Lowercase keyword searched for in prompts.
    pub keyword: String,
    /// The information block returned on a match.
    pub info: String,
}

/// The ordered disease table and its fallback block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    entries: Vec<DiseaseEntry>,
    fallback: String,
}

impl KnowledgeBase {
    /// Builds a knowledge base from entries and a fallback block.
    ///
    /// Keywords are trimmed and lowercased. Fails if a keyword or info text is
    /// empty, if two keywords collide, or if the fallback is empty.
    pub fn new(entries: Vec<DiseaseEntry>, fallback: impl Into<String>) -> Result<Self> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(KnowledgeError::EmptyFallback);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut normalized = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(KnowledgeError::EmptyKeyword { index });
            }
            if entry.info.trim().is_empty() {
                return Err(KnowledgeError::EmptyInfo { keyword });
            }
            if !seen.insert(keyword.clone()) {
                return Err(KnowledgeError::DuplicateKeyword(keyword));
            }
            normalized.push(DiseaseEntry {
                keyword,
                info: entry.info,
            });
        }

        Ok(KnowledgeBase {
            entries: normalized,
            fallback,
        })
    }

    /// The built-in table: diabetes, hypertension, asthma (in that order).
    pub fn builtin() -> Self {
        KnowledgeBase {
            entries: builtin::ENTRIES
                .iter()
                .map(|(keyword, info)| DiseaseEntry {
                    keyword: (*keyword).to_string(),
                    info: (*info).to_string(),
                })
                .collect(),
            fallback: builtin::GENERAL_HEALTH.to_string(),
        }
    }

    /// Parses a knowledge base from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: KnowledgeBase = serde_json::from_str(json)?;
        KnowledgeBase::new(raw.entries, raw.fallback)
    }

    /// Loads a knowledge base from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[DiseaseEntry] {
        &self.entries
    }

    /// The block returned when no keyword matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Finds the first entry whose keyword occurs anywhere in the lowercased
    /// prompt.
    ///
    /// Matching is plain substring search: no word boundaries, no ranking.
    /// "prediabetes" matches `diabetes`.
    pub fn lookup(&self, prompt: &str) -> Option<&DiseaseEntry> {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|entry| prompt.contains(entry.keyword.as_str()))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
