//! Filename stem normalization.
//!
//! Part images are named after the part they show, with underscores or
//! hyphens between words and hyphens inside numeric ranges:
//! ```text
//! dran_sword.webp   -> "Dran Sword"
//! 1-60.webp         -> "1-60"
//! gear-ball.webp    -> "Gear Ball"
//! ```
//!
//! This module turns such stems into slug ids, display names, and the
//! per-category abbreviations stored in the manifest's `short` field.

use crate::overrides::Overrides;
use crate::types::RatchetType;

/// A piece of a stem after hyphen classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text without hyphens. Separator hyphens have already become spaces.
    Text(String),
    /// A hyphen flanked by two ASCII digits, kept verbatim (`1-60`).
    NumericHyphen,
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) => s,
            Segment::NumericHyphen => "-",
        }
    }
}

/// Build a slug id from a filename stem.
///
/// Lowercases, then collapses each whitespace run and each underscore run
/// into a single `-`.
///
/// # Examples
///
/// ```
/// use beyparts_catalog::name_parser::id_from_stem;
///
/// assert_eq!(id_from_stem("Hells_Scythe"), "hells-scythe");
/// assert_eq!(id_from_stem("Gear  Ball"), "gear-ball");
/// assert_eq!(id_from_stem("1-60"), "1-60");
/// ```
pub fn id_from_stem(stem: &str) -> String {
    let lower = stem.to_lowercase();
    let dashed = collapse_runs(&lower, char::is_whitespace);
    collapse_runs(&dashed, |c| c == '_')
}

/// Build a display name from a filename stem.
///
/// Underscores become spaces, hyphens survive only between two digits, and
/// every word that doesn't start with a digit gets its first character
/// uppercased. The rest of each word keeps its original casing.
///
/// # Examples
///
/// ```
/// use beyparts_catalog::name_parser::title_from_stem;
///
/// assert_eq!(title_from_stem("dran_sword"), "Dran Sword");
/// assert_eq!(title_from_stem("1-60"), "1-60");
/// assert_eq!(title_from_stem("wizard-rod"), "Wizard Rod");
/// assert_eq!(title_from_stem("shark_edge_3-60"), "Shark Edge 3-60");
/// ```
pub fn title_from_stem(stem: &str) -> String {
    let spaced = stem.replace('_', " ");
    let joined: String = scan_hyphens(&spaced).iter().map(Segment::as_str).collect();
    joined
        .split_whitespace()
        .map(title_case_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a string on its hyphens, classifying each one.
///
/// A hyphen whose immediate neighbours are both ASCII digits becomes a
/// [`Segment::NumericHyphen`]; any other hyphen is replaced by a space inside
/// the surrounding [`Segment::Text`]. Concatenating the segments' `as_str()`
/// yields the hyphen-normalized string.
pub fn scan_hyphens(s: &str) -> Vec<Segment> {
    let chars: Vec<char> = s.chars().collect();
    let mut segments = Vec::new();
    let mut text = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch != '-' {
            text.push(ch);
            continue;
        }

        let prev = i.checked_sub(1).and_then(|p| chars.get(p));
        let next = chars.get(i + 1);
        let numeric =
            prev.is_some_and(|c| c.is_ascii_digit()) && next.is_some_and(|c| c.is_ascii_digit());

        if numeric {
            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
            }
            segments.push(Segment::NumericHyphen);
        } else {
            text.push(' ');
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    segments
}

// ── Abbreviations ───────────────────────────────────────────────────────────

/// Blades are never abbreviated.
pub fn short_for_blade(name: &str) -> String {
    name.to_string()
}

/// Ratchets are never abbreviated, standard or integrated.
pub fn short_for_ratchet(name: &str, _ratchet_type: RatchetType) -> String {
    name.to_string()
}

/// Bit abbreviation: the initials of the first two words of the display name.
///
/// `"Gear Ball"` gives `"GB"`, a single word like `"Wedge"` gives `"W"`.
/// A `bitShort` override keyed by the lowercased name wins.
pub fn short_for_bit(name: &str, overrides: &Overrides) -> String {
    if let Some(short) = overrides.bit_short(name) {
        return short.to_string();
    }
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect();
    initials.to_uppercase()
}

/// Chip abbreviation: the first word of the title-cased stem (`"dran"` gives `"Dran"`).
pub fn short_for_chip(stem: &str, overrides: &Overrides) -> String {
    if let Some(short) = overrides.chip_short(stem) {
        return short.to_string();
    }
    title_from_stem(&stem.to_lowercase())
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Assist blade abbreviation: the first letter of the title-cased stem.
pub fn short_for_assist(stem: &str, overrides: &Overrides) -> String {
    if let Some(short) = overrides.assist_short(stem) {
        return short.to_string();
    }
    title_from_stem(&stem.to_lowercase())
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Replace every run of characters matching `is_sep` with a single `-`.
fn collapse_runs(s: &str, is_sep: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if is_sep(ch) {
            if !in_run {
                out.push('-');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn title_case_token(token: &str) -> String {
    // Numeric words ("3-60", "9") stay as they are. Only digit-flanked
    // hyphens survive scan_hyphens, so the contains check rarely fires alone.
    if token.starts_with(|c: char| c.is_ascii_digit()) || token.contains('-') {
        return token.to_string();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/name_parser_tests.rs"]
mod tests;
