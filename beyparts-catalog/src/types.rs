//! Data model types for the parts manifest.
//!
//! These types are the serialized schema of `manifest/index.json`: one
//! [`Entry`] per image, grouped by category into [`Parts`], and wrapped in a
//! versioned [`Manifest`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Schema number written into every manifest.
pub const SCHEMA_VERSION: u32 = 1;

// ── Blade tags ──────────────────────────────────────────────────────────────

/// Product line a blade belongs to.
///
/// Overrides may name a system outside the canonical three; such values are
/// carried verbatim in [`BladeSystem::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BladeSystem {
    Bx,
    Ux,
    Cx,
    Other(String),
}

impl BladeSystem {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bx => "BX",
            Self::Ux => "UX",
            Self::Cx => "CX",
            Self::Other(s) => s,
        }
    }

    /// Lowercase code used as the id suffix of canonical blade buckets.
    pub fn code(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl From<String> for BladeSystem {
    fn from(s: String) -> Self {
        match s.as_str() {
            "BX" => Self::Bx,
            "UX" => Self::Ux,
            "CX" => Self::Cx,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for BladeSystem {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<BladeSystem> for String {
    fn from(system: BladeSystem) -> Self {
        match system {
            BladeSystem::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for BladeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a blade is a single piece or assembled from separate parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BladeConfig {
    Integrated,
    Standard,
    Other(String),
}

impl BladeConfig {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Integrated => "integrated",
            Self::Standard => "standard",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for BladeConfig {
    fn from(s: String) -> Self {
        match s.as_str() {
            "integrated" => Self::Integrated,
            "standard" => Self::Standard,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for BladeConfig {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<BladeConfig> for String {
    fn from(config: BladeConfig) -> Self {
        match config {
            BladeConfig::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for BladeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of a blade image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BladeCategory {
    Canon,
    Collab,
    Xover,
}

// ── Ratchet tags ────────────────────────────────────────────────────────────

/// Ratchet sub-type, taken from the directory the image sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatchetType {
    Standard,
    Integrated,
}

// ── Entry ───────────────────────────────────────────────────────────────────

/// One catalog item, derived from a single image file.
///
/// Category-specific attributes are `None` for categories they don't apply
/// to and are left out of the serialized object entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<BladeSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BladeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BladeCategory>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ratchet_type: Option<RatchetType>,
    /// Image location relative to the image root, `/`-separated.
    pub path: String,
    /// Reserved for manual alias assignment; always empty today.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Entry {
    /// An entry with only the fields every category carries.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        short: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short: short.into(),
            system: None,
            config: None,
            category: None,
            ratchet_type: None,
            path: path.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_blade_tags(
        mut self,
        system: BladeSystem,
        config: BladeConfig,
        category: BladeCategory,
    ) -> Self {
        self.system = Some(system);
        self.config = Some(config);
        self.category = Some(category);
        self
    }

    pub fn with_ratchet_type(mut self, ratchet_type: RatchetType) -> Self {
        self.ratchet_type = Some(ratchet_type);
        self
    }
}

// ── Manifest ────────────────────────────────────────────────────────────────

/// All collected entries, keyed by category.
///
/// The `rachet` spelling is part of the published manifest format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parts {
    pub blade: Vec<Entry>,
    pub rachet: Vec<Entry>,
    pub bit: Vec<Entry>,
    pub chip: Vec<Entry>,
    pub assist: Vec<Entry>,
}

impl Parts {
    /// Number of entries across all five categories.
    pub fn total(&self) -> usize {
        self.summary().total()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            blades: self.blade.len(),
            rachets: self.rachet.len(),
            bits: self.bit.len(),
            chips: self.chip.len(),
            assists: self.assist.len(),
        }
    }
}

/// The document written to the manifest output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub schema: u32,
    pub version: String,
    pub parts: Parts,
}

/// Per-category counts reported by a dry run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub blades: usize,
    pub rachets: usize,
    pub bits: usize,
    pub chips: usize,
    pub assists: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.blades + self.rachets + self.bits + self.chips + self.assists
    }
}

/// Wrapper that serializes as `{ "summary": { ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: Summary,
}
