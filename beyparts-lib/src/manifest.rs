//! Manifest assembly and output.

use std::path::Path;

use beyparts_catalog::{Manifest, Parts, SCHEMA_VERSION};
use chrono::{NaiveDate, Utc};

use crate::error::ManifestError;

/// Current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// `<YYYY-MM-DD>+<total entries>`.
///
/// Changes whenever the date or the entry count changes. Two runs on the same
/// day with the same count but renamed files get the same version.
pub fn dataset_version(parts: &Parts, date: NaiveDate) -> String {
    format!("{}+{}", date.format("%Y-%m-%d"), parts.total())
}

pub fn assemble(parts: Parts, date: NaiveDate) -> Manifest {
    Manifest {
        schema: SCHEMA_VERSION,
        version: dataset_version(&parts, date),
        parts,
    }
}

/// Serialize a manifest as JSON indented with two spaces.
pub fn manifest_json(manifest: &Manifest) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write `manifest` to `path`.
///
/// The document goes to a sibling `.tmp` file first and is renamed into
/// place, so a failure never leaves a truncated manifest behind. The parent
/// directory must already exist.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let serialized = manifest_json(manifest)?;
    let tmp = path.with_extension("json.tmp");

    std::fs::write(&tmp, serialized)
        .map_err(|e| ManifestError::io(path.display().to_string(), e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(ManifestError::io(path.display().to_string(), e));
    }

    log::debug!("Wrote {} ({} entries)", path.display(), manifest.parts.total());
    Ok(())
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
