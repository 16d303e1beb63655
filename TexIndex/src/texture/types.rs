//! Texture data model

use serde::Serialize;

use super::normalize_key;
use super::role::{MapRole, classify};

/// One physical image file belonging to one texture.
///
/// Field names on the wire follow the gallery front-end's `index.json`
/// shape: `{ name, type, src, relInTexture }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureFile {
    /// Base file name
    pub name: String,
    /// Material-map role
    #[serde(rename = "type")]
    pub role: MapRole,
    /// Where to fetch the bytes (remote URL or site-relative path)
    #[serde(rename = "src")]
    pub location: String,
    /// Path inside the texture folder, used as the archive entry name
    #[serde(rename = "relInTexture")]
    pub relative_path: String,
}

impl TextureFile {
    /// Create a file with a classified role and `relative_path == name`
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            role: classify(&name),
            relative_path: name.clone(),
            location: location.into(),
            name,
        }
    }

    /// Set the in-texture path. An empty path keeps the file name.
    #[must_use]
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        if !relative_path.is_empty() {
            self.relative_path = relative_path;
        }
        self
    }

    /// Override the classified role
    #[must_use]
    pub fn with_role(mut self, role: MapRole) -> Self {
        self.role = role;
        self
    }
}

/// Identity of a texture entry: trimmed, lower-cased (category, name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureKey {
    pub category: String,
    pub name: String,
}

impl TextureKey {
    #[must_use]
    pub fn new(category: &str, name: &str) -> Self {
        Self {
            category: normalize_key(category),
            name: normalize_key(name),
        }
    }
}

/// One logical texture: a folder of related material maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureEntry {
    /// Texture identifier (folder name)
    pub name: String,
    /// Grouping label one level above the texture
    pub category: String,
    /// Location of the preview image (thumbnail or best original)
    pub preview: String,
    /// Files in stable insertion order
    pub files: Vec<TextureFile>,
}

impl TextureEntry {
    /// Create an entry with no files and no preview yet
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            preview: String::new(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> TextureKey {
        TextureKey::new(&self.category, &self.name)
    }

    /// Roles of all files, in file order (may repeat)
    pub fn roles(&self) -> impl Iterator<Item = &MapRole> {
        self.files.iter().map(|f| &f.role)
    }

    /// Distinct roles in first-seen order
    #[must_use]
    pub fn distinct_roles(&self) -> Vec<&MapRole> {
        let mut seen: Vec<&MapRole> = Vec::new();
        for role in self.roles() {
            if !seen.contains(&role) {
                seen.push(role);
            }
        }
        seen
    }
}
