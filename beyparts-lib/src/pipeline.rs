//! End-to-end run: load overrides, collect, then report or write.

use std::path::PathBuf;

use beyparts_catalog::{Overrides, Summary};
use chrono::NaiveDate;

use crate::collect::collect_parts;
use crate::error::ManifestError;
use crate::layout::ProjectLayout;
use crate::manifest::{assemble, write_manifest};
use crate::source::FsImageSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Count entries only; nothing is written.
    DryRun,
    /// Write the full manifest to the layout's manifest path.
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    DryRun(Summary),
    Written {
        path: PathBuf,
        version: String,
        summary: Summary,
    },
}

/// Generate the manifest for the project at `layout`.
///
/// `date` feeds the dataset version; pass [`crate::today_utc`] outside tests.
pub fn run(
    layout: &ProjectLayout,
    mode: RunMode,
    date: NaiveDate,
) -> Result<RunOutcome, ManifestError> {
    let overrides = Overrides::load_or_default(&layout.overrides_path);
    let source = FsImageSource::new(&layout.images_dir);
    let parts = collect_parts(&source, &overrides);
    let summary = parts.summary();

    match mode {
        RunMode::DryRun => Ok(RunOutcome::DryRun(summary)),
        RunMode::Write => {
            let manifest = assemble(parts, date);
            write_manifest(&layout.manifest_path, &manifest)?;
            Ok(RunOutcome::Written {
                path: layout.manifest_path.clone(),
                version: manifest.version,
                summary,
            })
        }
    }
}
