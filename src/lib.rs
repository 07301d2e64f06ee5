//! `convertTxtToHtml` - A CLI tool for converting plain-text documents into HTML pages
//!
//! This library reads `.txt` and `.md` source files (a single file or every
//! direct child of a directory), renders each one into a minimally-structured
//! HTML page, and writes the results into a freshly cleared output directory.

pub mod cli;
pub mod error;
pub mod operations;
pub mod utils;

use anyhow::Result;
use cli::Args;
use operations::convert::ConvertOperation;

/// Main entry point for the conversion library
pub fn run(args: Args) -> Result<()> {
    let operation = ConvertOperation::new(args)?;
    operation.execute()
}
