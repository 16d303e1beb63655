//! Error types for `TexIndex`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `TexIndex` operations.
///
/// Only the offline indexer, configuration loading and thumbnail generation
/// can fail. Discovery, grouping and normalization are total and degrade by
/// dropping malformed input instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== Texture Root Errors ====================
    /// The texture root does not exist or is not a directory.
    #[error("texture root not found: {path}")]
    TextureRootNotFound {
        /// The configured texture root.
        path: PathBuf,
    },

    /// A file could not be expressed relative to the site root.
    #[error("{path} is not under site root {site_root}")]
    OutsideSiteRoot {
        /// The offending file.
        path: PathBuf,
        /// The configured site root.
        site_root: PathBuf,
    },

    /// A directory or file name is not valid UTF-8.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    // ==================== Thumbnail Errors ====================
    /// The source image for a thumbnail could not be decoded.
    #[error("failed to open thumbnail source {path}: {message}")]
    ThumbnailSourceFailed {
        /// The source image path.
        path: PathBuf,
        /// The decoder error message.
        message: String,
    },

    /// The thumbnail could not be encoded or written.
    #[error("failed to write thumbnail {path}: {message}")]
    ThumbnailWriteFailed {
        /// The thumbnail path.
        path: PathBuf,
        /// The encoder error message.
        message: String,
    },

    // ==================== Index Artifact Errors ====================
    /// The index artifact could not be published.
    #[error("failed to publish index {path}: {message}")]
    IndexWriteFailed {
        /// The artifact path.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    // ==================== Configuration Errors ====================
    /// The configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("config invalid: {message}")]
    ConfigInvalid {
        /// The validation error message.
        message: String,
    },

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `TexIndex` operations.
pub type Result<T> = std::result::Result<T, Error>;
