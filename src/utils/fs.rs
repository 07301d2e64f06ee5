//! Output-directory lifecycle

use crate::error::ConvertError;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Ensure that `dir` is an empty, writable directory
///
/// An existing directory has its contents cleared; a missing path is created
/// together with any missing parents; a regular file is rejected.
///
/// # Errors
///
/// Returns `ConvertError::OutputIsFile` when the path exists but is not a
/// directory, or a filesystem error when clearing/creating fails.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        clear_dir_contents(dir)?;
    } else if dir.exists() {
        return Err(ConvertError::output_is_file(dir.display().to_string()).into());
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Remove every entry beneath `dir`, leaving the directory itself in place
///
/// Subdirectory trees are removed recursively. Symbolic links are removed
/// without being followed.
pub fn clear_dir_contents(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read output directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in directory: {}", dir.display()))?;
        let path = entry.path();

        // DirEntry::file_type does not follow symlinks, so a link to a
        // directory is unlinked rather than descended into.
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to inspect entry: {}", path.display()))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        }
    }

    Ok(())
}
