//! Hand-curated exceptions to the filename-derived metadata.
//!
//! The override document is an optional JSON object:
//! ```json
//! {
//!   "xoverSystem": { "dragoon": "BX", "wizard": "UX" },
//!   "bladeConfig": { "hells_scythe": "integrated" },
//!   "assistShort": { "slash": "S" },
//!   "chipShort":   { "dran": "Dran" },
//!   "bitShort":    { "gear ball": "GB" }
//! }
//! ```
//! Every top-level key is optional. A key that is present replaces the
//! built-in (empty) mapping for that key as a whole.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Override mappings, loaded once and passed by reference to every
/// collector that consults them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    /// System tag for crossover blades, keyed by raw filename stem.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub xover_system: BTreeMap<String, String>,
    /// Blade config tag, keyed by raw filename stem.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blade_config: BTreeMap<String, String>,
    /// Assist blade abbreviation, keyed by lowercase stem.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assist_short: BTreeMap<String, String>,
    /// Chip abbreviation, keyed by lowercase stem.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chip_short: BTreeMap<String, String>,
    /// Bit abbreviation, keyed by lowercase display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bit_short: BTreeMap<String, String>,
}

impl Overrides {
    /// Parse an override document. The top level must be a JSON object.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "override document must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Load overrides from `path`, falling back to no overrides if the file
    /// is missing, unreadable, or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match load_overrides(path) {
            Ok(overrides) => {
                log::debug!("Loaded overrides from {}", path.display());
                overrides
            }
            Err(e) => {
                log::debug!("No overrides in use: {}", e);
                Self::default()
            }
        }
    }

    /// System override for a crossover blade. Empty values are kept.
    pub fn xover_system(&self, stem: &str) -> Option<&str> {
        self.xover_system.get(stem).map(String::as_str)
    }

    /// Config override for any blade. Empty values are kept.
    pub fn blade_config(&self, stem: &str) -> Option<&str> {
        self.blade_config.get(stem).map(String::as_str)
    }

    pub fn assist_short(&self, stem: &str) -> Option<&str> {
        non_empty(self.assist_short.get(&stem.to_lowercase()))
    }

    pub fn chip_short(&self, stem: &str) -> Option<&str> {
        non_empty(self.chip_short.get(&stem.to_lowercase()))
    }

    pub fn bit_short(&self, name: &str) -> Option<&str> {
        non_empty(self.bit_short.get(&name.to_lowercase()))
    }

    pub fn is_empty(&self) -> bool {
        self.xover_system.is_empty()
            && self.blade_config.is_empty()
            && self.assist_short.is_empty()
            && self.chip_short.is_empty()
            && self.bit_short.is_empty()
    }
}

/// Read and parse the override document at `path`.
///
/// Unlike [`Overrides::load_or_default`], this reports why nothing was
/// loaded: the file couldn't be read, or its contents didn't parse.
pub fn load_overrides(path: &Path) -> Result<Overrides, OverrideError> {
    let contents = std::fs::read_to_string(path).map_err(|e| OverrideError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Overrides::from_json(&contents).map_err(|e| OverrideError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

// An empty abbreviation is treated as no override at all.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod tests;
