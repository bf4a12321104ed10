use thiserror::Error;

/// Errors that stop a manifest from being produced.
///
/// Missing image directories and override documents are not errors; they are
/// recovered where they occur. Everything here is fatal to the run.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Writing the manifest (or its temporary file) failed
    #[error("Failed to write manifest {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The manifest could not be serialized
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ManifestError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
