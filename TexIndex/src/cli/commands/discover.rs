//! CLI command for discovering and listing textures

use std::path::PathBuf;

use anyhow::Context;

use crate::catalog::{Catalog, CatalogFilter, PAGE_SIZE, page, page_count, summary};
use crate::discovery::{
    DiscoverySource, LiveListing, PathEntry, PrebuiltIndex, RepoRef, discover_first, tree_listing,
    tree_paths,
};

/// Arguments for `texindex discover`
pub struct DiscoverArgs {
    pub index: Option<PathBuf>,
    pub tree: Option<PathBuf>,
    pub paths: Option<PathBuf>,
    pub repo: Option<RepoRef>,
    pub branch: String,
    pub category: Option<String>,
    pub query: String,
    pub page: usize,
    pub json: bool,
}

/// Read the live listing from a tree response or a plain path list
fn load_listing(args: &DiscoverArgs) -> anyhow::Result<Option<LiveListing>> {
    if let Some(tree) = &args.tree {
        let text = std::fs::read_to_string(tree)
            .with_context(|| format!("Failed to read tree listing: {}", tree.display()))?;
        let response: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Tree listing is not JSON: {}", tree.display()))?;

        let entries = match &args.repo {
            Some(repo) => tree_listing(&response, repo, &args.branch),
            // Without a repository, locations stay repository-relative
            None => tree_paths(&response).map(PathEntry::local).collect(),
        };
        return Ok(Some(LiveListing::new(entries)));
    }

    if let Some(paths) = &args.paths {
        let text = std::fs::read_to_string(paths)
            .with_context(|| format!("Failed to read path listing: {}", paths.display()))?;
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathEntry::local)
            .collect();
        return Ok(Some(LiveListing::new(entries)));
    }

    Ok(None)
}

pub fn execute(args: &DiscoverArgs) -> anyhow::Result<()> {
    let prebuilt = args.index.as_ref().map(PrebuiltIndex::from_path);
    let live = load_listing(args)?;

    let mut sources: Vec<&dyn DiscoverySource> = Vec::new();
    if let Some(prebuilt) = &prebuilt {
        sources.push(prebuilt);
    }
    if let Some(live) = &live {
        sources.push(live);
    }
    if sources.is_empty() {
        anyhow::bail!("Nothing to discover from: pass --index, --tree or --paths");
    }

    let Some(outcome) = discover_first(&sources) else {
        println!("No textures found.");
        return Ok(());
    };

    let catalog = Catalog::new(outcome.entries);
    let filter = CatalogFilter::new(args.category.as_deref(), &args.query);
    let matches = catalog.filter(&filter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("Source: {} ({} textures)", outcome.source, catalog.len());
    let categories: Vec<String> = catalog.categories().into_iter().map(|c| c.label).collect();
    println!("Categories: {}", categories.join(", "));
    println!();

    if matches.is_empty() {
        println!("No textures match the current filter.");
        return Ok(());
    }

    let pages = page_count(matches.len(), PAGE_SIZE);
    let current = args.page.clamp(1, pages);
    for entry in page(&matches, current, PAGE_SIZE) {
        println!("[{}] {}", entry.category, entry.name);
        println!("    {}", summary(entry));
        println!("    preview: {}", entry.preview);
    }
    println!();
    println!("Page {current}/{pages} ({} matching)", matches.len());

    Ok(())
}
