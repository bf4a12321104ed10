//! Parts catalog data model, filename normalization, and override loading.
//!
//! This crate defines the manifest entry types and the pure string rules
//! that turn an image filename stem into ids, display names, and
//! abbreviations. It does no directory traversal; `beyparts-lib` drives
//! the collectors on top of it.

pub mod name_parser;
pub mod overrides;
pub mod types;

pub use name_parser::{
    Segment, id_from_stem, scan_hyphens, short_for_assist, short_for_bit, short_for_blade,
    short_for_chip, short_for_ratchet, title_from_stem,
};
pub use overrides::{OverrideError, Overrides, load_overrides};
pub use types::*;
