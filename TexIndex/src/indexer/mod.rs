//! Offline texture indexer
//!
//! Walks `<root>/<category>/<texture>/` folders ahead of deployment, classifies
//! every image, generates one preview thumbnail per texture and publishes
//! `<root>/index.json` for the gallery to load instead of live discovery.
//!
//! Textures are processed in parallel on a bounded pool. The artifact is
//! written once, after every texture has finished; any error aborts the run
//! before anything is published.
//!
//! ## Usage
//!
//! ```no_run
//! use texindex::config::IndexerConfig;
//! use texindex::indexer::{ImageThumbnailer, run_indexer};
//!
//! let config = IndexerConfig::with_root("textures");
//! let summary = run_indexer(&config, &ImageThumbnailer, &|_| {})?;
//! println!("Indexed {} textures", summary.texture_count);
//! # Ok::<(), texindex::Error>(())
//! ```

pub mod thumbnail;
pub mod types;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::config::IndexerConfig;
use crate::error::{Error, Result};
use crate::texture::{
    TextureEntry, TextureFile, TextureSet, is_image_name, is_reserved_preview, select_preview,
};
use crate::utils::relative_path;

pub use thumbnail::{ImageThumbnailer, Thumbnailer, cover_crop};
pub use types::{
    IndexPhase, IndexProgress, IndexProgressCallback, IndexSummary, TextureIndex, ThumbnailStatus,
};

/// One `<category>/<texture>` folder found during scanning
#[derive(Debug, Clone)]
struct TextureDir {
    category: String,
    name: String,
    path: PathBuf,
}

/// Result of processing one texture folder
#[derive(Debug)]
struct ProcessedTexture {
    entry: TextureEntry,
    thumbnail: ThumbnailStatus,
}

/// Immediate children of `dir` accepted by `keep`, sorted by name.
///
/// `keep` sees a lossy name, so only accepted children with a non-UTF-8
/// name are an error.
fn list_children(
    dir: &Path,
    keep: fn(&std::fs::FileType, &str) -> bool,
) -> Result<Vec<(String, PathBuf)>> {
    let mut children = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !keep(&entry.file_type(), &entry.file_name().to_string_lossy()) {
            tracing::trace!("Ignoring {}", entry.path().display());
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::InvalidPath(entry.path().display().to_string()))?
            .to_string();
        children.push((name, entry.into_path()));
    }
    Ok(children)
}

fn list_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    list_children(dir, |file_type, _| file_type.is_dir())
}

/// Material-map images in a texture folder, generated previews excluded
fn list_images(dir: &Path) -> Result<Vec<String>> {
    Ok(list_children(dir, |file_type, name| {
        file_type.is_file() && is_image_name(name) && !is_reserved_preview(name)
    })?
    .into_iter()
    .map(|(name, _)| name)
    .collect())
}

/// Enumerate `<root>/<category>/<texture>` folders
fn scan_texture_dirs(root: &Path) -> Result<Vec<TextureDir>> {
    let mut dirs = Vec::new();
    for (category, category_path) in list_dirs(root)? {
        for (name, path) in list_dirs(&category_path)? {
            dirs.push(TextureDir {
                category: category.clone(),
                name,
                path,
            });
        }
    }
    Ok(dirs)
}

fn site_location(path: &Path, site_root: &Path) -> Result<String> {
    relative_path(path, site_root).ok_or_else(|| Error::OutsideSiteRoot {
        path: path.to_path_buf(),
        site_root: site_root.to_path_buf(),
    })
}

/// Classify one texture folder and make sure its thumbnail exists.
///
/// Returns `None` for folders without material maps.
fn process_texture(
    dir: &TextureDir,
    config: &IndexerConfig,
    site_root: &Path,
    thumbnailer: &dyn Thumbnailer,
) -> Result<Option<ProcessedTexture>> {
    let originals = list_images(&dir.path)?;

    if originals.is_empty() {
        tracing::debug!("Skipping {}/{}: no images", dir.category, dir.name);
        return Ok(None);
    }

    let thumb_path = dir.path.join(&config.thumbnail_name);
    let mut thumbnail = ThumbnailStatus::Missing;
    if let Some(best) = select_preview(&originals) {
        // Existing thumbnails are never refreshed, even if the source changed
        if thumb_path.is_file() {
            thumbnail = ThumbnailStatus::Reused;
        } else {
            thumbnailer.generate(&dir.path.join(best), &thumb_path, config.thumbnail_size)?;
            thumbnail = ThumbnailStatus::Generated;
        }
    }

    let mut entry = TextureEntry::new(dir.name.clone(), dir.category.clone());
    for name in originals {
        let location = site_location(&dir.path.join(&name), site_root)?;
        entry.files.push(TextureFile::new(name, location));
    }

    entry.preview = if thumb_path.is_file() {
        site_location(&thumb_path, site_root)?
    } else {
        entry.files[0].location.clone()
    };

    Ok(Some(ProcessedTexture { entry, thumbnail }))
}

/// Build the index in memory: scan, classify and generate thumbnails.
///
/// Nothing is written except missing thumbnails. Entries are sorted by
/// (category, name).
pub fn build_index(
    config: &IndexerConfig,
    thumbnailer: &dyn Thumbnailer,
    progress: IndexProgressCallback,
) -> Result<(TextureIndex, IndexSummary)> {
    config.validate()?;
    if !config.root.is_dir() {
        return Err(Error::TextureRootNotFound {
            path: config.root.clone(),
        });
    }
    let site_root = config.site_root();

    progress(&IndexProgress::new(IndexPhase::Scanning, 0, 1));
    let dirs = scan_texture_dirs(&config.root)?;
    let total = dirs.len();
    tracing::info!("Found {} texture folders under {}", total, config.root.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.unwrap_or(0))
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;

    let processed = AtomicUsize::new(0);
    let results: Vec<Option<ProcessedTexture>> = pool.install(|| {
        dirs.par_iter()
            .map(|dir| {
                let outcome = process_texture(dir, config, &site_root, thumbnailer);
                let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                progress(&IndexProgress::with_file(
                    IndexPhase::Processing,
                    current,
                    total,
                    format!("{}/{}", dir.category, dir.name),
                ));
                outcome
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut set = TextureSet::new();
    let mut thumbnails_generated = 0;
    let mut thumbnails_reused = 0;
    for texture in results.into_iter().flatten() {
        match texture.thumbnail {
            ThumbnailStatus::Generated => thumbnails_generated += 1,
            ThumbnailStatus::Reused => thumbnails_reused += 1,
            ThumbnailStatus::Missing => {}
        }
        set.push_entry(texture.entry);
    }

    let mut items = set.into_entries();
    items.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let summary = IndexSummary {
        texture_count: items.len(),
        file_count: items.iter().map(|entry| entry.files.len()).sum(),
        thumbnails_generated,
        thumbnails_reused,
        index_path: config.index_path(),
    };
    Ok((TextureIndex::new(items), summary))
}

/// Publish the artifact atomically: write a sibling temp file, then rename.
pub fn write_index(index: &TextureIndex, path: &Path) -> Result<()> {
    let json = index.to_json_pretty()?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| Error::IndexWriteFailed {
        path: path.to_path_buf(),
        message: e.error.to_string(),
    })?;
    Ok(())
}

/// Build the index and publish it at `config.index_path()`.
pub fn run_indexer(
    config: &IndexerConfig,
    thumbnailer: &dyn Thumbnailer,
    progress: IndexProgressCallback,
) -> Result<IndexSummary> {
    let (index, summary) = build_index(config, thumbnailer, progress)?;

    progress(&IndexProgress::with_file(
        IndexPhase::Writing,
        0,
        1,
        summary.index_path.display().to_string(),
    ));
    write_index(&index, &summary.index_path)?;
    progress(&IndexProgress::new(IndexPhase::Complete, 1, 1));

    tracing::info!(
        "Generated {} textures ({} thumbnails new, {} reused) -> {}",
        summary.texture_count,
        summary.thumbnails_generated,
        summary.thumbnails_reused,
        summary.index_path.display()
    );
    Ok(summary)
}
