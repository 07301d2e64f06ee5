//! # `convertTxtToHtml`
//!
//! Command-line front-end for the text-to-HTML converter.
//!
//! **Basic example:**
//! ```sh
//! convertTxtToHtml notes.txt
//! ```
//!
//! **Directory sweep with an explicit output directory:**
//! ```sh
//! convertTxtToHtml ./docs --output ./site
//! ```
//!
//! See `convertTxtToHtml --help` for the full option list.

use anyhow::Result;
use clap::{CommandFactory as _, Parser as _};
use convert_txt_to_html::cli::{Args, VERSION_STRING};
use convert_txt_to_html::error::ConvertError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag. Diagnostics go to
    // stderr; stdout is reserved for the "Processed:" protocol lines.
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.version {
        println!("{VERSION_STRING}");
        std::process::exit(0);
    }

    // No input path means the user wants to know how to drive the tool.
    if args.input.is_none() {
        Args::command().print_help()?;
        std::process::exit(0);
    }

    match convert_txt_to_html::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{err:#}");
            match err.downcast_ref::<ConvertError>() {
                Some(convert_err) => {
                    if convert_err.is_usage() {
                        Args::command().print_help()?;
                    }
                    std::process::exit(convert_err.exit_code());
                }
                None => std::process::exit(1),
            }
        }
    }
}
