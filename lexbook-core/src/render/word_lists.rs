//! Tag-filtered word-list rendering.

use std::path::{Path, PathBuf};

use crate::glossary::{Glossary, GlossaryError};

use super::output::write_atomic;
use super::{render_section, RenderOptions};

/// One word list: the tag selecting entries, the file it is written to, and
/// the section heading it carries.
#[derive(Debug, Clone)]
pub struct WordList {
    pub tag: String,
    pub file_name: String,
    pub title: String,
}

impl WordList {
    pub fn new(
        tag: impl Into<String>,
        file_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            file_name: file_name.into(),
            title: title.into(),
        }
    }

    /// The standard pair: new words and archaic words.
    pub fn standard() -> Vec<WordList> {
        vec![
            WordList::new("new", "new-words.adoc", "New Words"),
            WordList::new("archaic", "archaic-words.adoc", "Archaic Words"),
        ]
    }
}

/// A word-list file produced by [`WordListGenerator::generate`].
#[derive(Debug, Clone)]
pub struct WrittenList {
    pub path: PathBuf,
    pub entries: usize,
}

/// Renders tag-filtered word-list sections into a directory.
///
/// Word lists never emit `[[anchor]]` terms; the glossary section owns the
/// anchors and the lists `xref:` into them.
#[derive(Debug, Clone)]
pub struct WordListGenerator {
    lists: Vec<WordList>,
    options: RenderOptions,
}

impl WordListGenerator {
    pub fn new() -> Self {
        Self {
            lists: WordList::standard(),
            options: RenderOptions { anchors: false },
        }
    }

    /// Replace the configured lists.
    pub fn with_lists(mut self, lists: Vec<WordList>) -> Self {
        self.lists = lists;
        self
    }

    pub fn lists(&self) -> &[WordList] {
        &self.lists
    }

    /// Render the section text for one list.
    pub fn render_list(&self, glossary: &Glossary, list: &WordList) -> String {
        render_section(&list.title, glossary.tagged(&list.tag), &self.options)
    }

    /// Read `input` once and write every configured list under `out_dir`.
    ///
    /// The directory is created if missing. A list with no matching entries
    /// still produces its file. A parse failure aborts before anything is
    /// written.
    pub fn generate(
        &self,
        input: &Path,
        out_dir: &Path,
    ) -> Result<Vec<WrittenList>, GlossaryError> {
        let glossary = Glossary::from_json_file(input)?;

        std::fs::create_dir_all(out_dir).map_err(|source| GlossaryError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.lists.len());
        for list in &self.lists {
            let path = out_dir.join(&list.file_name);
            let entries = glossary.tagged(&list.tag).count();
            let section = self.render_list(&glossary, list);
            write_atomic(&path, &section)?;
            tracing::debug!("Rendered {} entries tagged \"{}\" to {:?}", entries, list.tag, path);
            written.push(WrittenList { path, entries });
        }
        Ok(written)
    }
}

impl Default for WordListGenerator {
    fn default() -> Self {
        Self::new()
    }
}
