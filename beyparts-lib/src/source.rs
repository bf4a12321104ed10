//! Image directory listing.
//!
//! Collectors never touch the filesystem directly; they ask an
//! [`ImageSource`] for the contents of a directory under the image root.

use std::io;
use std::path::PathBuf;

/// Extensions recognized as part images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["webp"];

/// One directory entry as seen by a collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    /// `false` for directories, symlinks, and anything else that isn't a regular file.
    pub is_file: bool,
}

impl ListedFile {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }

    /// Filename stem if this is a regular file with an image extension.
    ///
    /// Only the final extension is removed (`a.b.webp` gives `a.b`). Names
    /// with nothing before the extension (`.webp`) are not images.
    pub fn image_stem(&self) -> Option<&str> {
        if !self.is_file {
            return None;
        }
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || !is_image_extension(ext) {
            return None;
        }
        Some(stem)
    }
}

/// Check an extension (without the dot) against [`IMAGE_EXTENSIONS`].
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// Read-only access to the image tree.
pub trait ImageSource {
    /// List the entries of `rel_dir`, a `/`-separated path under the image root.
    ///
    /// A directory that is missing or unreadable is an `Err`; callers decide
    /// whether that matters.
    fn list(&self, rel_dir: &str) -> io::Result<Vec<ListedFile>>;
}

/// [`ImageSource`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageSource for FsImageSource {
    fn list(&self, rel_dir: &str) -> io::Result<Vec<ListedFile>> {
        let dir = rel_dir
            .split('/')
            .filter(|c| !c.is_empty())
            .fold(self.root.clone(), |path, component| path.join(component));

        let mut listed = Vec::new();
        for entry in std::fs::read_dir(&dir)?.flatten() {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                log::warn!(
                    "Skipping non-UTF-8 file name {:?} in {}",
                    entry.file_name(),
                    dir.display()
                );
                continue;
            };
            // file_type() does not follow symlinks
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            listed.push(ListedFile { name, is_file });
        }
        Ok(listed)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
