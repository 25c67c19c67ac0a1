//! Whole-glossary section rendering.

use std::path::Path;

use crate::glossary::{Glossary, GlossaryError};

use super::output::write_atomic;
use super::{render_section, RenderOptions};

/// Renders the full glossary as one sorted AsciiDoc section.
#[derive(Debug, Clone)]
pub struct GlossaryRenderer {
    title: String,
    options: RenderOptions,
}

impl GlossaryRenderer {
    pub fn new() -> Self {
        Self {
            title: "Glossary".to_string(),
            options: RenderOptions::default(),
        }
    }

    /// Override the section heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the section text for an already-parsed glossary.
    pub fn render(&self, glossary: &Glossary) -> String {
        render_section(&self.title, glossary.iter(), &self.options)
    }

    /// Read `input`, render every entry, and write `output` atomically.
    ///
    /// Returns the number of entries rendered. Missing components of the
    /// output path are created. On any error the output file is left as it
    /// was.
    pub fn generate(&self, input: &Path, output: &Path) -> Result<usize, GlossaryError> {
        let glossary = Glossary::from_json_file(input)?;
        let section = self.render(&glossary);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| GlossaryError::Write {
                path: output.to_path_buf(),
                source,
            })?;
        }
        write_atomic(output, &section)?;
        tracing::debug!("Rendered glossary section to {:?}", output);
        Ok(glossary.len())
    }
}

impl Default for GlossaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}
