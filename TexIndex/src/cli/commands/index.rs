//! CLI command for building index.json offline

use std::path::Path;
use std::sync::Once;
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{DISK, LOOKING_GLASS, PICTURE, print_done, print_step, texture_bar};
use crate::config::IndexerConfig;
use crate::indexer::{ImageThumbnailer, IndexPhase, IndexProgress, run_indexer};

pub fn execute(
    root: Option<&Path>,
    config: Option<&Path>,
    workers: Option<usize>,
    thumb_size: Option<u32>,
    quiet: bool,
) -> anyhow::Result<()> {
    let mut config = IndexerConfig::load_or_default(config).context("Failed to load config")?;
    if let Some(root) = root {
        config.root = root.to_path_buf();
    }
    if workers.is_some() {
        config.workers = workers;
    }
    if let Some(size) = thumb_size {
        config.thumbnail_size = size;
    }

    let start = Instant::now();
    if !quiet {
        print_step(1, 3, LOOKING_GLASS, &format!("Scanning {}...", config.root.display()));
    }

    let pb = texture_bar(0, quiet);
    let processing_started = Once::new();
    let progress = |p: &IndexProgress| match p.phase {
        IndexPhase::Processing => {
            processing_started.call_once(|| {
                if !quiet {
                    pb.println(format!("[2/3] {PICTURE}Processing {} textures...", p.total));
                }
                pb.set_length(p.total as u64);
            });
            pb.set_position(p.current as u64);
            if let Some(file) = &p.current_file {
                pb.set_message(file.clone());
            }
        }
        IndexPhase::Writing => {
            pb.finish_and_clear();
            if !quiet {
                let target = p.current_file.as_deref().unwrap_or("index");
                print_step(3, 3, DISK, &format!("Writing {target}..."));
            }
        }
        IndexPhase::Scanning | IndexPhase::Complete => {}
    };

    let summary = run_indexer(&config, &ImageThumbnailer, &progress)
        .with_context(|| format!("Indexing failed for {}", config.root.display()))?;
    pb.finish_and_clear();

    println!(
        "Generated {} textures ({} files) -> {}",
        summary.texture_count,
        summary.file_count,
        summary.index_path.display()
    );
    println!(
        "Thumbnails: {} generated, {} reused",
        summary.thumbnails_generated, summary.thumbnails_reused
    );
    if !quiet {
        print_done(start.elapsed());
    }

    Ok(())
}
