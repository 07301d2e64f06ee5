//! Conversion run coordination

use crate::cli::Args;
use crate::error::ConvertError;
use crate::operations::enumerate::enumerate_sources;
use crate::operations::render::render_file;
use crate::utils::fs::prepare_output_dir;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Coordinates a complete conversion run
///
/// Sources are enumerated (and the input path thereby validated) before the
/// output directory is cleared, so an invalid input never destroys an
/// existing output directory.
#[non_exhaustive]
pub struct ConvertOperation {
    input: PathBuf,
    output: PathBuf,
    escape: bool,
}

impl ConvertOperation {
    /// Create a new conversion operation from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidInput` when no input path was supplied.
    #[inline]
    pub fn new(args: Args) -> Result<Self> {
        let input = args
            .input
            .ok_or_else(|| ConvertError::invalid_input("<missing input path>"))?;

        Ok(Self {
            input,
            output: args.output,
            escape: args.escape,
        })
    }

    /// Execute the run: enumerate sources, prepare the output directory,
    /// render every file in enumeration order
    ///
    /// # Errors
    ///
    /// Fails on invalid input, on an output path that is a regular file, and
    /// on the first per-file I/O error; remaining files are not processed.
    pub fn execute(&self) -> Result<()> {
        let sources = enumerate_sources(&self.input)?;
        debug!("Enumerated {} source file(s)", sources.len());

        prepare_output_dir(&self.output)?;

        for source in &sources {
            render_file(source, &self.output, self.escape)?;
        }

        info!(
            "Converted {} file(s) into {}",
            sources.len(),
            self.output.display()
        );
        Ok(())
    }
}
