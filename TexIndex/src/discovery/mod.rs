//! Texture discovery from flat path listings and prebuilt indexes
//!
//! Live discovery turns an unordered bag of repository paths shaped like
//! `textures/<category>/<texture>/<file>` into [`TextureEntry`] values.
//! Prebuilt `index.json` payloads go through [`normalize`] instead, so both
//! origins produce the same entry shape.
//!
//! ## Usage
//!
//! ```
//! use texindex::discovery::{PathEntry, group};
//!
//! let entries = group(&[
//!     PathEntry::local("textures/Wood/Oak/oak_basecolor.png"),
//!     PathEntry::local("textures/Wood/Oak/oak_normal.png"),
//! ]);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].files.len(), 2);
//! ```

pub mod normalize;
pub mod remote;
pub mod strategy;

use crate::texture::role::strip_extension;
use crate::texture::{
    DEFAULT_TEXTURE_NAME, ROOT_CANDIDATES, TextureEntry, TextureFile, TextureSet, UNCATEGORIZED,
    is_image_name, is_reserved_preview,
};

pub use normalize::normalize;
pub use remote::{RepoRef, branch_candidates, raw_url, tree_listing, tree_paths};
pub use strategy::{Discovery, DiscoveryOutcome, DiscoverySource, LiveListing, PrebuiltIndex, discover_first};

/// One listed file: a slash-delimited path plus where its bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Repository path, e.g. `textures/Wood/Oak/oak_basecolor.png`
    pub path: String,
    /// Fetchable location (raw URL or site-relative path)
    pub location: String,
}

impl PathEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            location: location.into(),
        }
    }

    /// Entry whose location is the path itself (same-origin hosting)
    #[must_use]
    pub fn local(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            location: path.clone(),
            path,
        }
    }
}

/// Counts of paths discarded by [`group_with_report`], by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// Unrecognized root folder or fewer than three segments
    pub bad_shape: usize,
    /// Not a recognized raster image
    pub unsupported_extension: usize,
    /// Generated preview file (`thumb.webp` and friends)
    pub reserved_preview: usize,
}

impl SkipCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.bad_shape + self.unsupported_extension + self.reserved_preview
    }
}

/// Grouping result with discard diagnostics
#[derive(Debug, Clone, Default)]
pub struct GroupReport {
    pub entries: Vec<TextureEntry>,
    pub skipped: SkipCounts,
}

enum Skip {
    BadShape,
    UnsupportedExtension,
    ReservedPreview,
}

struct Placement<'a> {
    category: &'a str,
    texture: String,
    file: TextureFile,
}

/// Texture name when the texture segment is blank:
/// the stem up to the first underscore.
fn derive_texture_name(file_name: &str) -> String {
    let head = strip_extension(file_name).split('_').next().unwrap_or_default().trim();
    if head.is_empty() {
        DEFAULT_TEXTURE_NAME.to_string()
    } else {
        head.to_string()
    }
}

fn place(entry: &PathEntry) -> Result<Placement<'_>, Skip> {
    let parts: Vec<&str> = entry.path.split('/').collect();
    if parts.len() < 3 || !ROOT_CANDIDATES.contains(&parts[0]) {
        return Err(Skip::BadShape);
    }

    let file_name = parts[parts.len() - 1];
    if file_name.is_empty() {
        return Err(Skip::BadShape);
    }
    if !is_image_name(file_name) {
        return Err(Skip::UnsupportedExtension);
    }
    if is_reserved_preview(file_name) {
        return Err(Skip::ReservedPreview);
    }

    let category = if parts[1].trim().is_empty() { UNCATEGORIZED } else { parts[1] };

    // In root/category/file.png the file name itself names the texture
    let nested = parts.len() >= 4;
    let texture = if !parts[2].trim().is_empty() {
        parts[2].to_string()
    } else {
        derive_texture_name(file_name)
    };

    let relative_path = if nested {
        parts[3..].iter().filter(|s| !s.is_empty()).copied().collect::<Vec<_>>().join("/")
    } else {
        file_name.to_string()
    };

    Ok(Placement {
        category,
        texture,
        file: TextureFile::new(file_name, entry.location.clone()).with_relative_path(relative_path),
    })
}

/// Group a flat path listing into texture entries, counting discards.
///
/// Never fails: malformed paths are skipped and counted. Entries are sorted
/// by name; files keep listing order.
#[must_use]
pub fn group_with_report(paths: &[PathEntry]) -> GroupReport {
    let mut set = TextureSet::new();
    let mut skipped = SkipCounts::default();

    for entry in paths {
        match place(entry) {
            Ok(placement) => set.push_file(placement.category, &placement.texture, placement.file),
            Err(Skip::BadShape) => skipped.bad_shape += 1,
            Err(Skip::UnsupportedExtension) => skipped.unsupported_extension += 1,
            Err(Skip::ReservedPreview) => skipped.reserved_preview += 1,
        }
    }

    let mut entries = set.into_entries();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        "Grouped {} paths into {} textures ({} skipped)",
        paths.len(),
        entries.len(),
        skipped.total()
    );

    GroupReport { entries, skipped }
}

/// Group a flat path listing into texture entries.
#[must_use]
pub fn group(paths: &[PathEntry]) -> Vec<TextureEntry> {
    group_with_report(paths).entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::MapRole;

    fn local(paths: &[&str]) -> Vec<PathEntry> {
        paths.iter().map(|p| PathEntry::local(*p)).collect()
    }

    #[test]
    fn test_group_two_textures() {
        let entries = group(&local(&[
            "textures/Wood/Oak/oak_basecolor.png",
            "textures/Wood/Oak/oak_normal.png",
            "textures/Stone/Slate/slate_ao.png",
        ]));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Oak");
        assert_eq!(entries[0].category, "Wood");
        assert_eq!(entries[0].files.len(), 2);
        assert_eq!(entries[0].preview, "textures/Wood/Oak/oak_basecolor.png");
        assert_eq!(entries[1].name, "Slate");
        assert_eq!(entries[1].category, "Stone");
        assert_eq!(entries[1].files.len(), 1);
        assert_eq!(entries[1].files[0].role, MapRole::Ao);
    }

    #[test]
    fn test_group_skips_and_counts() {
        let report = group_with_report(&local(&[
            "textures/Wood",
            "assets/Wood/Oak/oak_basecolor.png",
            "textures/Wood/Oak/readme.md",
            "textures/Wood/Oak/thumb.webp",
            "textures/Wood/Oak/",
        ]));

        assert!(report.entries.is_empty());
        assert_eq!(report.skipped.bad_shape, 3);
        assert_eq!(report.skipped.unsupported_extension, 1);
        assert_eq!(report.skipped.reserved_preview, 1);
        assert_eq!(report.skipped.total(), 5);
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn test_group_accepts_root_spellings() {
        let entries = group(&local(&[
            "Textures/Metal/Steel/steel_metal.png",
            "Текстуры/Metal/Steel/steel_rough.png",
            "texture/Metal/Steel/steel_col.png",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].files.len(), 3);
    }

    #[test]
    fn test_group_file_directly_in_category() {
        let entries = group(&local(&[
            "textures/Fabric/denim_basecolor.jpg",
            "textures/Fabric/denim_normal.jpg",
        ]));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["denim_basecolor.jpg", "denim_normal.jpg"]);
        assert_eq!(entries[1].files.len(), 1);
        assert_eq!(entries[1].files[0].relative_path, "denim_normal.jpg");
        assert_eq!(entries[1].files[0].role, MapRole::Normal);
    }

    #[test]
    fn test_group_blank_texture_segment_derives_name() {
        let entries = group(&local(&[
            "textures/Fabric//denim_ao.jpg",
            "textures/Fabric// denim_normal.jpg",
            "textures/Fabric/ /_x.jpg",
        ]));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["denim", DEFAULT_TEXTURE_NAME]);
        assert_eq!(entries[0].files.len(), 2);
        assert_eq!(entries[0].files[0].relative_path, "denim_ao.jpg");
        assert_eq!(entries[1].files[0].relative_path, "_x.jpg");
    }

    #[test]
    fn test_group_nested_relative_path() {
        let entries = group(&local(&["textures/Wood/Oak/4k/oak_height.tif"]));
        let file = &entries[0].files[0];
        assert_eq!(file.name, "oak_height.tif");
        assert_eq!(file.relative_path, "4k/oak_height.tif");
        assert_eq!(file.role, MapRole::Displacement);
    }

    #[test]
    fn test_group_merges_case_variants() {
        let entries = group(&local(&[
            "textures/Wood/Oak/oak_ao.png",
            "textures/wood/ oak/oak_normal.png",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Oak");
        assert_eq!(entries[0].files.len(), 2);
    }

    #[test]
    fn test_group_empty_category_is_uncategorized() {
        let entries = group(&local(&["textures//Oak/oak_ao.png"]));
        assert_eq!(entries[0].category, UNCATEGORIZED);
    }

    #[test]
    fn test_group_is_deterministic() {
        let input = local(&[
            "textures/B/Two/two_ao.png",
            "textures/A/One/one_basecolor.png",
            "textures/B/Two/two_normal.png",
        ]);
        assert_eq!(group(&input), group(&input));
    }
}
