//! Discovery of source files for a conversion run
//!
//! Given an input path, yields the ordered set of `.txt`/`.md` files to
//! process: the path itself when it is an accepted file, or the direct
//! children of a directory (no recursion into subdirectories).

use crate::error::ConvertError;
use crate::utils::path::is_source_name;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Enumerate the source files reachable from `input`
///
/// A directory yields its direct children with accepted suffixes, in the
/// order the filesystem reports them; an empty sweep is a warning, not an
/// error. A single accepted file yields itself.
///
/// # Errors
///
/// Returns `ConvertError::InvalidInput` when the path does not exist, is not
/// a regular file or directory, or carries an unaccepted suffix.
pub fn enumerate_sources(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let mut sources = Vec::new();

        for entry in WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry
                .with_context(|| format!("Failed to read input directory: {}", input.display()))?;

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if is_source_name(name) {
                sources.push(entry.path().to_path_buf());
            } else {
                debug!("Skipping {}: not a .txt or .md file", name);
            }
        }

        if sources.is_empty() {
            warn!(
                "No .txt or .md files found in the input directory: {}",
                input.display()
            );
        }

        return Ok(sources);
    }

    let accepted_file = input
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_source_name);

    if input.is_file() && accepted_file {
        return Ok(vec![input.to_path_buf()]);
    }

    Err(ConvertError::invalid_input(input.display().to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_accepted_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "hello\n").unwrap();

        let sources = enumerate_sources(&file).unwrap();
        assert_eq!(sources, vec![file]);
    }

    #[test]
    fn test_directory_yields_direct_children_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a\n").unwrap();
        fs::write(temp_dir.path().join("b.md"), "b\n").unwrap();
        fs::write(temp_dir.path().join("c.png"), [0_u8, 1]).unwrap();

        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.txt"), "deep\n").unwrap();

        let mut sources = enumerate_sources(temp_dir.path()).unwrap();
        sources.sort();

        assert_eq!(
            sources,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.md")]
        );
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let sources = enumerate_sources(temp_dir.path()).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_missing_path_is_invalid_input() {
        let err = enumerate_sources(Path::new("/nonexistent/missing.xyz")).unwrap_err();
        let convert_err = err.downcast_ref::<ConvertError>().unwrap();
        assert!(matches!(convert_err, ConvertError::InvalidInput { .. }));
    }

    #[test]
    fn test_wrong_extension_is_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("image.png");
        fs::write(&file, [0_u8, 1]).unwrap();

        let err = enumerate_sources(&file).unwrap_err();
        let convert_err = err.downcast_ref::<ConvertError>().unwrap();
        assert!(matches!(convert_err, ConvertError::InvalidInput { .. }));
    }

    #[test]
    fn test_uppercase_suffix_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("SHOUTY.TXT");
        fs::write(&file, "hello\n").unwrap();

        assert!(enumerate_sources(&file).is_err());
    }
}
