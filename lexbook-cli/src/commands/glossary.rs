//! Glossary section rendering command.

use anyhow::{Context, Result};
use lexbook_core::GlossaryRenderer;
use std::path::Path;

/// Render the sorted glossary section from `input` into `output`.
pub fn render_glossary(input: &Path, output: &Path, title: &str) -> Result<()> {
    tracing::info!("Rendering glossary from {:?}", input);

    let count = GlossaryRenderer::new()
        .with_title(title)
        .generate(input, output)
        .with_context(|| format!("Failed to render glossary from {:?}", input))?;

    tracing::info!("✓ Wrote {:?} ({} entries)", output, count);

    Ok(())
}
