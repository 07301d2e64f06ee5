use clap::Parser;
use std::path::PathBuf;

/// Default output directory, created relative to the current working directory
pub const DEFAULT_OUTPUT_DIR: &str = "convertTxtToHtml";

/// Version string printed for `-v`/`--version`
pub const VERSION_STRING: &str = "convertTxtToHtml version 0.1";

/// Command-line arguments for convertTxtToHtml
#[derive(Parser, Debug, Clone)]
#[command(name = "convertTxtToHtml")]
#[command(about = "Convert plain-text documents (.txt, .md) into minimal HTML pages")]
#[command(long_about = None)]
pub struct Args {
    /// Input file or directory containing .txt/.md files
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Specify the output directory
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output: PathBuf,

    /// Escape HTML special characters in source text
    #[arg(long)]
    pub escape: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Print version information
    #[arg(short = 'v', long)]
    pub version: bool,
}
