use clap::Subcommand;
use std::path::PathBuf;

pub mod classify;
pub mod discover;
pub mod index;

#[derive(Subcommand)]
pub enum Commands {
    /// Build index.json and preview thumbnails from a local texture folder
    Index {
        /// Texture root containing <category>/<texture>/ folders
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Config file (defaults to ./texindex.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of textures processed concurrently
        #[arg(short, long)]
        workers: Option<usize>,

        /// Thumbnail edge length in pixels
        #[arg(long)]
        thumb_size: Option<u32>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the material-map role derived from file names
    Classify {
        /// File names to classify
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Discover textures from a prebuilt index, falling back to a path listing
    Discover {
        /// Prebuilt index.json (tried first)
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// Repository tree API response (JSON) used for live discovery
        #[arg(long, conflicts_with = "paths")]
        tree: Option<PathBuf>,

        /// Plain text listing, one repository path per line
        #[arg(long, conflicts_with = "tree")]
        paths: Option<PathBuf>,

        /// Repository owner for raw file URLs (with --tree)
        #[arg(long, requires = "repo")]
        owner: Option<String>,

        /// Repository name for raw file URLs (with --tree)
        #[arg(long, requires = "owner")]
        repo: Option<String>,

        /// Branch for raw file URLs
        #[arg(long, default_value = "main")]
        branch: String,

        /// Only show textures in this category
        #[arg(long)]
        category: Option<String>,

        /// Only show textures matching this text (name, category or role)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Page of results to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Print matching entries as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Index {
                root,
                config,
                workers,
                thumb_size,
                quiet,
            } => index::execute(
                root.as_deref(),
                config.as_deref(),
                *workers,
                *thumb_size,
                *quiet,
            ),
            Commands::Classify { names } => classify::execute(names),
            Commands::Discover {
                index,
                tree,
                paths,
                owner,
                repo,
                branch,
                category,
                query,
                page,
                json,
            } => discover::execute(&discover::DiscoverArgs {
                index: index.clone(),
                tree: tree.clone(),
                paths: paths.clone(),
                repo: owner
                    .as_ref()
                    .zip(repo.as_ref())
                    .map(|(owner, repo)| crate::discovery::RepoRef::new(owner, repo)),
                branch: branch.clone(),
                category: category.clone(),
                query: query.clone(),
                page: *page,
                json: *json,
            }),
        }
    }
}
