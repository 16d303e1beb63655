//! # TexIndex
//!
//! Texture discovery and indexing engine for static PBR texture galleries.
//!
//! A gallery repository stores material maps as
//! `textures/<category>/<texture>/<files>`. This crate turns that tree, either
//! as a flat listing of repository paths or as a local directory, into a
//! normalized list of texture entries with classified material-map roles and
//! a chosen preview.
//!
//! ## Quick Start
//!
//! ### Live discovery from a path listing
//!
//! ```
//! use texindex::prelude::*;
//!
//! let entries = group(&[
//!     PathEntry::local("textures/Wood/Oak/oak_basecolor.png"),
//!     PathEntry::local("textures/Wood/Oak/oak_normal.png"),
//!     PathEntry::local("textures/Stone/Slate/slate_ao.png"),
//! ]);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].files[1].role, MapRole::Normal);
//! ```
//!
//! ### Prebuilt index first, live listing as fallback
//!
//! ```no_run
//! use texindex::prelude::*;
//!
//! let index = PrebuiltIndex::from_path("textures/index.json");
//! let live = LiveListing::new(vec![PathEntry::local("textures/Wood/Oak/oak_ao.png")]);
//! let sources: [&dyn DiscoverySource; 2] = [&index, &live];
//! match discover_first(&sources) {
//!     Some(outcome) => println!("{} textures from {}", outcome.entries.len(), outcome.source),
//!     None => println!("No textures"),
//! }
//! ```
//!
//! ### Building `index.json` offline
//!
//! ```no_run
//! use texindex::prelude::*;
//!
//! let config = IndexerConfig::with_root("textures");
//! run_indexer(&config, &ImageThumbnailer, &|_| {})?;
//! # Ok::<(), texindex::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `texindex` command-line binary

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod indexer;
pub mod texture;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::texture::{
        MapRole, TextureEntry, TextureFile, TextureSet, classify, select_preview,
    };

    pub use crate::discovery::{
        Discovery, DiscoveryOutcome, DiscoverySource, LiveListing, PathEntry, PrebuiltIndex,
        RepoRef, discover_first, group, group_with_report, normalize, tree_listing,
    };

    pub use crate::config::IndexerConfig;
    pub use crate::indexer::{
        ImageThumbnailer, IndexSummary, TextureIndex, Thumbnailer, build_index, run_indexer,
        write_index,
    };

    pub use crate::catalog::{Catalog, CatalogFilter};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
