//! Path and filename helpers

/// Accepted source-file suffixes, matched literally and case-sensitively
pub const SOURCE_SUFFIXES: &[&str] = &[".txt", ".md"];

/// Check whether a filename carries an accepted source suffix
///
/// Matching is byte-literal: `.TXT` and `.Md` are rejected.
#[must_use]
pub fn is_source_name(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Filename with its final extension removed
///
/// A leading dot never counts as an extension separator, so a file literally
/// named `.txt` keeps its full name.
#[must_use]
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index > 0 => &name[..index],
        _ => name,
    }
}
