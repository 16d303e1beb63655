//! Indexer configuration (`texindex.toml`)
//!
//! ```toml
//! [indexer]
//! root = "textures"
//! index_file = "index.json"
//! thumbnail_name = "thumb.webp"
//! thumbnail_size = 320
//! workers = 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::texture::{is_image_name, is_reserved_preview};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "texindex.toml";

fn default_root() -> PathBuf {
    PathBuf::from("textures")
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_thumbnail_name() -> String {
    "thumb.webp".to_string()
}

fn default_thumbnail_size() -> u32 {
    320
}

/// The full configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub indexer: IndexerConfig,
}

/// Offline indexer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Texture root containing `<category>/<texture>/` folders
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Base that `src` locations are made relative to. Defaults to the
    /// root's parent, i.e. the site directory the gallery is served from.
    #[serde(default)]
    pub site_root: Option<PathBuf>,
    /// Artifact file name, written under `root`
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Generated thumbnail file name inside each texture folder
    #[serde(default = "default_thumbnail_name")]
    pub thumbnail_name: String,
    /// Thumbnail edge length in pixels
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    /// Upper bound on concurrent texture workers (`None`: one per core)
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            site_root: None,
            index_file: default_index_file(),
            thumbnail_name: default_thumbnail_name(),
            thumbnail_size: default_thumbnail_size(),
            workers: None,
        }
    }
}

impl IndexerConfig {
    /// Config with defaults for the given texture root
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parse the `[indexer]` table of a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        file.indexer.validate()?;
        Ok(file.indexer)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, else `texindex.toml` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE_NAME).is_file() => Self::load(Path::new(CONFIG_FILE_NAME)),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges and the thumbnail naming convention
    pub fn validate(&self) -> Result<()> {
        if self.thumbnail_size == 0 {
            return Err(Error::ConfigInvalid {
                message: "thumbnail_size must be greater than 0".to_string(),
            });
        }
        if self.workers == Some(0) {
            return Err(Error::ConfigInvalid {
                message: "workers must be greater than 0".to_string(),
            });
        }
        // A thumbnail that is not reserved would be re-indexed as a material map
        if !is_image_name(&self.thumbnail_name) || !is_reserved_preview(&self.thumbnail_name) {
            return Err(Error::ConfigInvalid {
                message: format!("thumbnail_name '{}' is not a reserved preview name", self.thumbnail_name),
            });
        }
        // "." or "/" has no parent to serve the gallery from
        if self.site_root.is_none() && self.root.file_name().is_none() {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "root '{}' has no parent directory; set site_root explicitly",
                    self.root.display()
                ),
            });
        }
        if self.index_file.is_empty() || self.index_file.contains(['/', '\\']) {
            return Err(Error::ConfigInvalid {
                message: format!("index_file '{}' must be a plain file name", self.index_file),
            });
        }
        Ok(())
    }

    /// Resolved site root
    #[must_use]
    pub fn site_root(&self) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| {
            self.root
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }

    /// Path of the index artifact
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexerConfig::default();
        assert_eq!(config.root, PathBuf::from("textures"));
        assert_eq!(config.index_path(), PathBuf::from("textures/index.json"));
        assert_eq!(config.thumbnail_size, 320);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = IndexerConfig::from_toml_str(
            r#"
            [indexer]
            root = "site/textures"
            thumbnail_size = 256
            workers = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.root, PathBuf::from("site/textures"));
        assert_eq!(config.site_root(), PathBuf::from("site"));
        assert_eq!(config.thumbnail_size, 256);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.thumbnail_name, "thumb.webp");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(IndexerConfig::from_toml_str("").unwrap(), IndexerConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        assert!(IndexerConfig::from_toml_str("[indexer]\nthumbnail_size = 0").is_err());
        assert!(IndexerConfig::from_toml_str("[indexer]\nworkers = 0").is_err());
        assert!(IndexerConfig::from_toml_str("[indexer]\nthumbnail_name = \"oak.webp\"").is_err());
        assert!(IndexerConfig::from_toml_str("[indexer]\nindex_file = \"a/b.json\"").is_err());
        assert!(matches!(
            IndexerConfig::from_toml_str("[indexer]\nthumbnail_size = \"big\""),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_site_root_for_bare_root() {
        let config = IndexerConfig::with_root("textures");
        assert_eq!(config.site_root(), PathBuf::from(""));
    }

    #[test]
    fn test_root_without_parent_needs_site_root() {
        for root in [".", "/", "textures/.."] {
            let err = IndexerConfig::with_root(root).validate().unwrap_err();
            assert!(matches!(err, Error::ConfigInvalid { .. }), "{root}");
        }

        let mut config = IndexerConfig::with_root(".");
        config.site_root = Some(PathBuf::from("."));
        assert!(config.validate().is_ok());
        assert_eq!(config.site_root(), PathBuf::from("."));
        assert!(IndexerConfig::with_root("site/textures/").validate().is_ok());
    }
}
