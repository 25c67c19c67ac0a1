//! Atomic file output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::glossary::GlossaryError;

/// Write `contents` to `path` through a temporary file in the destination
/// directory, renamed into place once fully written. An interrupted write
/// never leaves a partial file at `path`.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), GlossaryError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_error = |source: std::io::Error| GlossaryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
