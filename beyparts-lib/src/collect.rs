//! Per-category collectors.
//!
//! Each collector lists its fixed directories under the image root and turns
//! every image file into one [`Entry`]. Directory layout:
//! ```text
//! blade/{bx,ux,cx}        canonical blades, system from the directory
//! blade/collabs           collaboration blades, always BX
//! blade/xover             crossover blades, system from overrides
//! blade/chip              chips
//! blade/assist            assist blades
//! rachet/{standard,integrated}
//! bit/standard
//! ```
//! A directory that can't be listed contributes no entries. Files are
//! processed in name order so repeated runs produce identical output.

use beyparts_catalog::{
    BladeCategory, BladeConfig, BladeSystem, Entry, Overrides, Parts, RatchetType, id_from_stem,
    short_for_assist, short_for_bit, short_for_blade, short_for_chip, short_for_ratchet,
    title_from_stem,
};

use crate::source::ImageSource;

/// Canonical blade buckets: (directory under `blade/`, system code).
const CANON_BUCKETS: &[(&str, &str)] = &[("bx", "BX"), ("ux", "UX"), ("cx", "CX")];

const RATCHET_BUCKETS: &[(&str, RatchetType)] = &[
    ("standard", RatchetType::Standard),
    ("integrated", RatchetType::Integrated),
];

/// An image file that passed the extension filter.
struct ImageFile {
    stem: String,
    /// Location relative to the image root.
    path: String,
}

/// Run all five collectors.
pub fn collect_parts(source: &dyn ImageSource, overrides: &Overrides) -> Parts {
    let parts = Parts {
        blade: collect_blades(source, overrides),
        rachet: collect_ratchets(source),
        bit: collect_bits(source, overrides),
        chip: collect_chips(source, overrides),
        assist: collect_assists(source, overrides),
    };
    let summary = parts.summary();
    log::debug!(
        "Collected {} blades, {} ratchets, {} bits, {} chips, {} assist blades",
        summary.blades,
        summary.rachets,
        summary.bits,
        summary.chips,
        summary.assists,
    );
    parts
}

/// Blades from the canonical, collab, and crossover buckets, in that order.
pub fn collect_blades(source: &dyn ImageSource, overrides: &Overrides) -> Vec<Entry> {
    let mut out = Vec::new();

    for (sub, code) in CANON_BUCKETS {
        let system = BladeSystem::from(*code);
        let suffix = system.code();
        for image in list_images(source, &format!("blade/{sub}")) {
            out.push(blade_entry(
                &image,
                &suffix,
                system.clone(),
                BladeConfig::Integrated,
                BladeCategory::Canon,
                overrides,
            ));
        }
    }

    for image in list_images(source, "blade/collabs") {
        out.push(blade_entry(
            &image,
            "collab",
            BladeSystem::Bx,
            BladeConfig::Integrated,
            BladeCategory::Collab,
            overrides,
        ));
    }

    for image in list_images(source, "blade/xover") {
        let system = overrides
            .xover_system(&image.stem)
            .map(BladeSystem::from)
            .unwrap_or(BladeSystem::Bx);
        out.push(blade_entry(
            &image,
            "xover",
            system,
            BladeConfig::Standard,
            BladeCategory::Xover,
            overrides,
        ));
    }

    out
}

/// Ratchets from `rachet/standard` then `rachet/integrated`. Ids carry no suffix.
pub fn collect_ratchets(source: &dyn ImageSource) -> Vec<Entry> {
    let mut out = Vec::new();
    for (sub, ratchet_type) in RATCHET_BUCKETS {
        for image in list_images(source, &format!("rachet/{sub}")) {
            let name = title_from_stem(&image.stem);
            let short = short_for_ratchet(&name, *ratchet_type);
            out.push(
                Entry::new(id_from_stem(&image.stem), name, short, image.path)
                    .with_ratchet_type(*ratchet_type),
            );
        }
    }
    out
}

pub fn collect_bits(source: &dyn ImageSource, overrides: &Overrides) -> Vec<Entry> {
    list_images(source, "bit/standard")
        .into_iter()
        .map(|image| {
            let name = title_from_stem(&image.stem);
            let short = short_for_bit(&name, overrides);
            Entry::new(id_from_stem(&image.stem), name, short, image.path)
        })
        .collect()
}

pub fn collect_chips(source: &dyn ImageSource, overrides: &Overrides) -> Vec<Entry> {
    list_images(source, "blade/chip")
        .into_iter()
        .map(|image| {
            Entry::new(
                format!("{}-chip", id_from_stem(&image.stem)),
                format!("{} Chip", title_from_stem(&image.stem)),
                short_for_chip(&image.stem, overrides),
                image.path,
            )
        })
        .collect()
}

pub fn collect_assists(source: &dyn ImageSource, overrides: &Overrides) -> Vec<Entry> {
    list_images(source, "blade/assist")
        .into_iter()
        .map(|image| {
            Entry::new(
                format!("{}-assist-blade", id_from_stem(&image.stem)),
                format!("{} Assist Blade", title_from_stem(&image.stem)),
                short_for_assist(&image.stem, overrides),
                image.path,
            )
        })
        .collect()
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn blade_entry(
    image: &ImageFile,
    id_suffix: &str,
    system: BladeSystem,
    default_config: BladeConfig,
    category: BladeCategory,
    overrides: &Overrides,
) -> Entry {
    let name = title_from_stem(&image.stem);
    let short = short_for_blade(&name);
    let config = overrides
        .blade_config(&image.stem)
        .map(BladeConfig::from)
        .unwrap_or(default_config);
    Entry::new(
        format!("{}-{}", id_from_stem(&image.stem), id_suffix),
        name,
        short,
        image.path.clone(),
    )
    .with_blade_tags(system, config, category)
}

/// Image files in `rel_dir`, sorted by file name. Listing errors yield nothing.
fn list_images(source: &dyn ImageSource, rel_dir: &str) -> Vec<ImageFile> {
    let mut listed = match source.list(rel_dir) {
        Ok(listed) => listed,
        Err(e) => {
            log::debug!("No images in {}: {}", rel_dir, e);
            return Vec::new();
        }
    };
    listed.sort_by(|a, b| a.name.cmp(&b.name));

    listed
        .iter()
        .filter_map(|file| {
            file.image_stem().map(|stem| ImageFile {
                stem: stem.to_string(),
                path: format!("{}/{}", rel_dir, file.name),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/collect_tests.rs"]
mod tests;
