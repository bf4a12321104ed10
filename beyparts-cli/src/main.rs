//! beyparts CLI
//!
//! Scans the project's image tree and writes `manifest/index.json`, or with
//! `--dry-run` prints the per-category counts as JSON.

mod cli_types;
mod error;
mod logging;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use beyparts_lib::{ProjectLayout, RunMode, RunOutcome, SummaryReport, today_utc};

use cli_types::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        // Not through the logger: RUST_LOG can silence it.
        eprintln!("{} {e}", "Error:".if_supports_color(Stderr, |t| t.red()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let layout = ProjectLayout::resolve(cli.root);
    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };
    log::debug!("Scanning {}", layout.images_dir.display());

    match beyparts_lib::run(&layout, mode, today_utc())? {
        RunOutcome::DryRun(summary) => {
            let report = serde_json::to_string_pretty(&SummaryReport { summary })?;
            println!("{report}");
        }
        RunOutcome::Written {
            path,
            version,
            summary,
        } => {
            log::info!(
                "{} {}",
                "Manifest written to".if_supports_color(Stderr, |t| t.bold()),
                layout.display_relative(&path),
            );
            log::info!("  Entries: {:>6}", summary.total());
            log::info!("  Version: {}", version);
        }
    }

    Ok(())
}
