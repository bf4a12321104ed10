//! Manifest generation: directory scanning, per-category collectors, and
//! assembly of the versioned manifest document.

pub mod collect;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod pipeline;
pub mod source;

pub use beyparts_catalog::{Entry, Manifest, Overrides, Parts, Summary, SummaryReport};
pub use collect::{
    collect_assists, collect_bits, collect_blades, collect_chips, collect_parts, collect_ratchets,
};
pub use error::ManifestError;
pub use layout::ProjectLayout;
pub use manifest::{assemble, dataset_version, manifest_json, today_utc, write_manifest};
pub use pipeline::{RunMode, RunOutcome, run};
pub use source::{FsImageSource, IMAGE_EXTENSIONS, ImageSource, ListedFile};
