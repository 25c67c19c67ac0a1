//! Glossary entry model: raw JSON records and validated entries.

use serde::Deserialize;
use thiserror::Error;

use crate::anchor::anchor_id;

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Missing or empty word")]
    MissingWord,
}

/// A glossary record as it appears in the source JSON.
///
/// Every field is optional at this stage; validation happens when the record
/// is promoted to a [`GlossaryEntry`]. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub word: Option<String>,

    #[serde(default)]
    pub definition: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub cross_references: Vec<String>,

    #[serde(default)]
    pub plural: Option<String>,

    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub origin_word: Option<String>,

    #[serde(default)]
    pub part_of_speech: Option<String>,

    #[serde(default)]
    pub pronunciation: Option<String>,

    #[serde(default)]
    pub also_translated: Vec<String>,

    #[serde(default)]
    pub opposite: Option<String>,
}

/// A validated glossary entry.
///
/// Built through [`GlossaryEntry::from_record`]: the headword is guaranteed
/// non-empty, tags are lowercased and deduplicated, and the list fields carry
/// no blank elements. The definition is kept verbatim so inline formatting
/// markers survive until rendering.
#[derive(Debug, Clone)]
pub struct GlossaryEntry {
    word: String,
    definition: String,
    tags: Vec<String>,
    cross_references: Vec<String>,
    plural: Option<String>,
    origin: Option<String>,
    origin_word: Option<String>,
    part_of_speech: Option<String>,
    pronunciation: Option<String>,
    also_translated: Vec<String>,
    opposite: Option<String>,
}

impl GlossaryEntry {
    /// Validate a raw record and build an entry from it.
    ///
    /// Fails when the record has no word, or the word is empty or
    /// all-whitespace.
    pub fn from_record(record: RawRecord) -> Result<Self, EntryError> {
        let word = record
            .word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(EntryError::MissingWord)?
            .to_string();

        Ok(Self {
            word,
            definition: record.definition,
            tags: normalize_tags(record.tags),
            cross_references: clean_list(record.cross_references),
            plural: clean_optional(record.plural),
            origin: clean_optional(record.origin),
            origin_word: clean_optional(record.origin_word),
            part_of_speech: clean_optional(record.part_of_speech),
            pronunciation: clean_optional(record.pronunciation),
            also_translated: clean_list(record.also_translated),
            opposite: clean_optional(record.opposite),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn cross_references(&self) -> &[String] {
        &self.cross_references
    }

    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn origin_word(&self) -> Option<&str> {
        self.origin_word.as_deref()
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    pub fn pronunciation(&self) -> Option<&str> {
        self.pronunciation.as_deref()
    }

    pub fn also_translated(&self) -> &[String] {
        &self.also_translated
    }

    pub fn opposite(&self) -> Option<&str> {
        self.opposite.as_deref()
    }

    /// Anchor id derived from the headword.
    pub fn anchor_id(&self) -> String {
        anchor_id(&self.word)
    }

    /// Whether the entry carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Trim an optional field, treating blank values as absent.
fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim list elements and drop blank ones, preserving order.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Lowercase, trim, and deduplicate tags, preserving first-seen order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
