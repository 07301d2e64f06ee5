//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// Output Error - the output path exists but is a regular file
    #[error("Output path must be a directory, not a file: {path}")]
    OutputIsFile { path: String },

    /// Input Error - input path missing, not a regular file/directory, or
    /// without an accepted extension
    #[error("Invalid input file or directory: {path}")]
    InvalidInput { path: String },
}

impl ConvertError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::OutputIsFile { .. } => 2,
            Self::InvalidInput { .. } => 3,
        }
    }

    /// Whether this error is a usage error that warrants printing help text
    #[must_use]
    #[inline]
    pub const fn is_usage(&self) -> bool {
        matches!(
            *self,
            Self::OutputIsFile { .. } | Self::InvalidInput { .. }
        )
    }

    /// Create an output-is-file error
    #[inline]
    pub fn output_is_file<S: Into<String>>(path: S) -> Self {
        Self::OutputIsFile { path: path.into() }
    }

    /// Create an invalid-input error
    #[inline]
    pub fn invalid_input<S: Into<String>>(path: S) -> Self {
        Self::InvalidInput { path: path.into() }
    }
}
