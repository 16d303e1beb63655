//! Texture model, role classification and preview selection
//!
//! These are the leaves of the discovery engine:
//! - [`classify`] derives a material-map role from a file name
//! - [`select_preview`] ranks candidate files for the card preview
//! - [`TextureSet`] merges files into entries keyed by (category, name)

pub mod preview;
pub mod role;
pub mod set;
pub mod types;

pub use preview::{PreviewCandidate, preview_score, select_preview};
pub use role::{FALLBACK_ROLE, MapRole, classify};
pub use set::TextureSet;
pub use types::{TextureEntry, TextureFile, TextureKey};

/// Accepted spellings of the texture root folder in repository trees.
pub const ROOT_CANDIDATES: &[&str] = &["textures", "Textures", "Текстуры", "texture"];

/// Raster image extensions recognized as material maps (lower-case).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tif", "tiff"];

/// File names reserved for generated previews (compared case-insensitively).
pub const RESERVED_PREVIEW_NAMES: &[&str] = &[
    "thumb.webp",
    "thumb.jpg",
    "thumb.jpeg",
    "thumb.png",
    "preview.webp",
    "preview.jpg",
    "preview.jpeg",
    "preview.png",
];

/// Category used when none is given.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Texture name used when none can be derived.
pub const DEFAULT_TEXTURE_NAME: &str = "texture";

/// Trim and lower-case a label for identity comparison
#[must_use]
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lower-cased extension after the final dot, if any
#[must_use]
pub fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| normalize_key(ext))
        .filter(|ext| !ext.is_empty())
}

/// Whether the file name has a recognized raster image extension
#[must_use]
pub fn is_image_name(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether the file name is a reserved generated-preview name
#[must_use]
pub fn is_reserved_preview(file_name: &str) -> bool {
    let lower = normalize_key(file_name);
    RESERVED_PREVIEW_NAMES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_name() {
        assert!(is_image_name("oak.png"));
        assert!(is_image_name("OAK.JPEG"));
        assert!(is_image_name("a.b.tiff"));
        assert!(!is_image_name("readme.md"));
        assert!(!is_image_name("png"));
        assert!(!is_image_name("oak."));
    }

    #[test]
    fn test_is_reserved_preview() {
        assert!(is_reserved_preview("thumb.webp"));
        assert!(is_reserved_preview("Preview.PNG"));
        assert!(!is_reserved_preview("oak_thumb.webp"));
    }
}
