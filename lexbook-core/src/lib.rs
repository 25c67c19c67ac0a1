//! # lexbook-core
//!
//! Core library for the lexbook glossary toolchain.
//!
//! This crate parses a JSON glossary dataset into validated entries and
//! renders AsciiDoc fragments from it: one sorted glossary section and
//! tag-filtered word lists, ready for book assembly.

pub mod anchor;
pub mod entry;
pub mod glossary;
pub mod markup;
pub mod render;

pub use anchor::anchor_id;
pub use entry::{EntryError, GlossaryEntry, RawRecord};
pub use glossary::{parse_records, Glossary, GlossaryError, UnresolvedReference};
pub use markup::format_markers;
pub use render::{GlossaryRenderer, RenderOptions, WordList, WordListGenerator, WrittenList};
