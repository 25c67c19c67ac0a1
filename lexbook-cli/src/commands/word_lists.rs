//! Word-list rendering command.

use anyhow::{Context, Result};
use lexbook_core::WordListGenerator;
use std::path::Path;

/// Render the standard word lists from `input` into `out_dir`.
pub fn render_word_lists(input: &Path, out_dir: &Path) -> Result<()> {
    tracing::info!("Rendering word lists from {:?}", input);

    let written = WordListGenerator::new()
        .generate(input, out_dir)
        .with_context(|| format!("Failed to render word lists from {:?}", input))?;

    for list in &written {
        tracing::info!("✓ Wrote {:?} ({} entries)", list.path, list.entries);
    }

    Ok(())
}
