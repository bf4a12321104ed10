use thiserror::Error;

use beyparts_lib::ManifestError;

/// Errors that end the process with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Manifest could not be produced
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    /// Dry-run summary could not be serialized
    #[error("Failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}
