//! Fixed project layout.
//!
//! Every path the generator touches hangs off a single project root:
//! ```text
//! <root>/
//!   images/                           image tree scanned by the collectors
//!   manifest/index.json               generated manifest
//!   logic/data/overrides/config.json  optional override document
//! ```

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub images_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub overrides_path: PathBuf,
}

impl ProjectLayout {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            images_dir: root.join("images"),
            manifest_path: root.join("manifest").join("index.json"),
            overrides_path: root
                .join("logic")
                .join("data")
                .join("overrides")
                .join("config.json"),
            root,
        }
    }

    /// Use the CLI override if given, otherwise the current directory.
    pub fn resolve(cli_override: Option<PathBuf>) -> Self {
        let root = cli_override
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Self::from_root(root)
    }

    /// `path` relative to the project root for display, or as-is if it lies outside.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
