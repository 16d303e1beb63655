//! Types for the offline indexer: progress tracking, artifact and summary

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::texture::TextureEntry;

/// Progress callback type for indexing runs
pub type IndexProgressCallback<'a> = &'a (dyn Fn(&IndexProgress) + Sync + Send);

/// Progress information during an indexing run
#[derive(Debug, Clone)]
pub struct IndexProgress {
    /// Current operation phase
    pub phase: IndexPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current texture being processed (if applicable)
    pub current_file: Option<String>,
}

impl IndexProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: IndexPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a texture name
    #[must_use]
    pub fn with_file(phase: IndexPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of an indexing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPhase {
    /// Enumerating category and texture folders
    Scanning,
    /// Classifying files and generating thumbnails
    Processing,
    /// Publishing index.json
    Writing,
    /// Run complete
    Complete,
}

impl IndexPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanning => "Scanning folders",
            Self::Processing => "Processing textures",
            Self::Writing => "Writing index",
            Self::Complete => "Complete",
        }
    }
}

/// The persisted `index.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureIndex {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub generated_at: String,
    pub items: Vec<TextureEntry>,
}

impl TextureIndex {
    /// Stamp a list of entries with the current time
    #[must_use]
    pub fn new(items: Vec<TextureEntry>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            items,
        }
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// What happened to a texture's thumbnail during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailStatus {
    /// Created by this run
    Generated,
    /// Already present and left untouched
    Reused,
    /// No preview candidate, nothing generated
    Missing,
}

/// Outcome of a completed indexing run
#[derive(Debug, Clone)]
pub struct IndexSummary {
    /// Number of textures in the artifact
    pub texture_count: usize,
    /// Number of material-map files across all textures
    pub file_count: usize,
    /// Thumbnails generated by this run
    pub thumbnails_generated: usize,
    /// Thumbnails that already existed
    pub thumbnails_reused: usize,
    /// Where the artifact was written
    pub index_path: PathBuf,
}
