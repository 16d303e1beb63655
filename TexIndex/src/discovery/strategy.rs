//! Ordered discovery strategies
//!
//! The gallery prefers a prebuilt `index.json` and falls back to live tree
//! discovery. Each source reports either entries or [`Discovery::NoData`];
//! [`discover_first`] walks them in order.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::normalize::normalize;
use super::{PathEntry, group};
use crate::texture::TextureEntry;

/// Result of asking one source for textures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The source produced at least one entry
    Found(Vec<TextureEntry>),
    /// The source was unavailable, unreadable or empty
    NoData,
}

impl Discovery {
    /// `Found` for a non-empty list, `NoData` otherwise
    #[must_use]
    pub fn from_entries(entries: Vec<TextureEntry>) -> Self {
        if entries.is_empty() { Self::NoData } else { Self::Found(entries) }
    }
}

/// A place textures can be discovered from
pub trait DiscoverySource {
    /// Short name for logs and listings
    fn label(&self) -> &str;

    /// Produce entries, or `NoData`. Must not panic on bad input.
    fn discover(&self) -> Discovery;
}

/// Where a prebuilt index payload comes from
#[derive(Debug, Clone)]
enum IndexPayload {
    Value(Value),
    Text(String),
    File(PathBuf),
}

/// A prebuilt `index.json`, trusted fully or discarded fully
#[derive(Debug, Clone)]
pub struct PrebuiltIndex {
    payload: IndexPayload,
}

impl PrebuiltIndex {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { payload: IndexPayload::Value(value) }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { payload: IndexPayload::Text(text.into()) }
    }

    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self { payload: IndexPayload::File(path.as_ref().to_path_buf()) }
    }

    fn parse(text: &str) -> Option<Value> {
        serde_json::from_str(text)
            .inspect_err(|e| tracing::warn!("Prebuilt index is not valid JSON: {}", e))
            .ok()
    }
}

impl DiscoverySource for PrebuiltIndex {
    fn label(&self) -> &str {
        "prebuilt index"
    }

    fn discover(&self) -> Discovery {
        let value = match &self.payload {
            IndexPayload::Value(value) => return Discovery::from_entries(normalize(value)),
            IndexPayload::Text(text) => Self::parse(text),
            IndexPayload::File(path) => match std::fs::read_to_string(path) {
                Ok(text) => Self::parse(&text),
                Err(e) => {
                    tracing::warn!("Cannot read prebuilt index {}: {}", path.display(), e);
                    None
                }
            },
        };

        value.map_or(Discovery::NoData, |value| Discovery::from_entries(normalize(&value)))
    }
}

/// Live discovery over a flat path listing
#[derive(Debug, Clone, Default)]
pub struct LiveListing {
    entries: Vec<PathEntry>,
}

impl LiveListing {
    #[must_use]
    pub fn new(entries: Vec<PathEntry>) -> Self {
        Self { entries }
    }
}

impl DiscoverySource for LiveListing {
    fn label(&self) -> &str {
        "live listing"
    }

    fn discover(&self) -> Discovery {
        Discovery::from_entries(group(&self.entries))
    }
}

/// Entries from the first source that found any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    /// Label of the source that produced the entries
    pub source: String,
    pub entries: Vec<TextureEntry>,
}

/// Try sources in order and return the first populated result.
///
/// `None` means every source reported `NoData`; callers show an empty state.
#[must_use]
pub fn discover_first(sources: &[&dyn DiscoverySource]) -> Option<DiscoveryOutcome> {
    for source in sources {
        match source.discover() {
            Discovery::Found(entries) => {
                tracing::info!("Discovered {} textures from {}", entries.len(), source.label());
                return Some(DiscoveryOutcome {
                    source: source.label().to_string(),
                    entries,
                });
            }
            Discovery::NoData => {
                tracing::debug!("No textures from {}, trying next source", source.label());
            }
        }
    }
    None
}
