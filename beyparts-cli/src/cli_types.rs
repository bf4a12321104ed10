//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "beyparts")]
#[command(about = "Generate the parts manifest from the image tree", long_about = None)]
pub(crate) struct Cli {
    /// Print per-category counts instead of writing the manifest
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Project root containing images/ and manifest/ (defaults to current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}
