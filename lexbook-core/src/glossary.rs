//! Glossary collection: JSON parsing, ordering, and reference checking.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::anchor::anchor_id;
use crate::entry::{EntryError, GlossaryEntry, RawRecord};

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a top-level JSON array of entry records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Record {index}: expected a JSON object, found {found}")]
    RecordNotObject { index: usize, found: &'static str },

    #[error("Record {index}: {source}")]
    RecordField {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Record {index}: {source}")]
    Record { index: usize, source: EntryError },

    #[error("Duplicate word: {word}")]
    DuplicateWord { word: String },

    /// Two distinct words reduce to the same anchor id.
    #[error("Duplicate anchor id {anchor:?}: {word} collides with {other}")]
    DuplicateAnchor {
        word: String,
        other: String,
        anchor: String,
    },
}

/// Parse the top-level JSON text into validated entries, in document order.
///
/// The input must be a JSON array of objects; each object is deserialized
/// as a [`RawRecord`] and validated. The first failing record aborts the
/// whole parse.
pub fn parse_records(text: &str) -> Result<Vec<GlossaryEntry>, GlossaryError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let records = value.as_array().ok_or_else(|| GlossaryError::NotAnArray {
        found: json_type_name(&value),
    })?;

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !record.is_object() {
            return Err(GlossaryError::RecordNotObject {
                index,
                found: json_type_name(record),
            });
        }
        let raw: RawRecord = serde_json::from_value(record.clone())
            .map_err(|source| GlossaryError::RecordField { index, source })?;
        let entry = GlossaryEntry::from_record(raw)
            .map_err(|source| GlossaryError::Record { index, source })?;
        entries.push(entry);
    }
    Ok(entries)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// An in-memory glossary collection.
///
/// Entries are keyed by the lowercased word, which is both the uniqueness
/// rule (words differing only in case are duplicates) and the iteration
/// order (case-insensitive alphabetical). Anchor ids are unique as well:
/// distinct words that reduce to the same id are rejected, so each
/// `[[...]]` target is defined at most once.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: BTreeMap<String, GlossaryEntry>,
}

impl Glossary {
    /// Build a collection from already-validated entries.
    ///
    /// Fails on the first word already present under its lowercased form,
    /// and on the first anchor id already claimed by an earlier word.
    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Result<Self, GlossaryError> {
        let mut map = BTreeMap::new();
        let mut anchors: HashMap<String, String> = HashMap::new();
        for entry in entries {
            let key = entry.word().to_lowercase();
            if map.contains_key(&key) {
                return Err(GlossaryError::DuplicateWord {
                    word: entry.word().to_string(),
                });
            }
            let anchor = entry.anchor_id();
            if let Some(other) = anchors.get(&anchor) {
                return Err(GlossaryError::DuplicateAnchor {
                    word: entry.word().to_string(),
                    other: other.clone(),
                    anchor,
                });
            }
            anchors.insert(anchor, entry.word().to_string());
            map.insert(key, entry);
        }
        Ok(Self { entries: map })
    }

    pub fn from_json_str(text: &str) -> Result<Self, GlossaryError> {
        Self::from_entries(parse_records(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, GlossaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| GlossaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let glossary = Self::from_json_str(&text)?;
        tracing::debug!("Parsed {} entries from {:?}", glossary.len(), path);
        Ok(glossary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in case-insensitive alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.values()
    }

    /// Look up an entry by word (case-insensitive).
    pub fn get(&self, word: &str) -> Option<&GlossaryEntry> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Entries carrying the given tag, in glossary order.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a GlossaryEntry> {
        self.iter().filter(move |entry| entry.has_tag(tag))
    }

    /// Cross-reference and opposite targets that resolve to no entry.
    ///
    /// Resolution compares anchor ids, so references match their targets
    /// case-insensitively. Rendering never performs this check; unresolved
    /// targets are reported here as warnings only.
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let anchors: HashSet<String> = self.iter().map(GlossaryEntry::anchor_id).collect();

        let mut unresolved = Vec::new();
        for entry in self.iter() {
            let targets = entry
                .cross_references()
                .iter()
                .map(String::as_str)
                .chain(entry.opposite());
            for target in targets {
                if !anchors.contains(&anchor_id(target)) {
                    unresolved.push(UnresolvedReference {
                        word: entry.word().to_string(),
                        reference: target.to_string(),
                    });
                }
            }
        }
        unresolved
    }
}

/// A reference whose target word is not present in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Word of the entry holding the reference.
    pub word: String,
    /// The reference string as written in the source.
    pub reference: String,
}
