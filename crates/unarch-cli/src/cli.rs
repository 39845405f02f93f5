//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unarch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (default: current directory)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Skip detection and treat the input as this format (e.g. tar.gz, 7z)
    #[arg(short, long, value_name = "TAG")]
    pub format: Option<String>,

    /// 7z-compatible archiver used for 7z and rar archives
    #[arg(long, value_name = "PROGRAM")]
    pub archiver: Option<String>,

    /// Do not apply permission modes stored in the archive
    #[arg(long)]
    pub no_preserve_permissions: bool,
}
