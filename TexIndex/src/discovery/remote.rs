//! Repository tree listing adapter
//!
//! Converts a recursive git-tree API response into [`PathEntry`] values with
//! raw-content URLs. Fetching the tree is left to the caller.

use serde_json::Value;

use super::PathEntry;

/// Branches tried after the repository's default branch, in order.
pub const FALLBACK_BRANCHES: &[&str] = &["gh-pages", "master", "main"];

/// Owner and repository name of a hosted gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Derive the repository from a project-pages location:
    /// `<owner>.github.io/<repo>/...`.
    #[must_use]
    pub fn from_pages_location(host: &str, path: &str) -> Option<Self> {
        let owner = host.strip_suffix(".github.io")?.split('.').next()?;
        let repo = path.split('/').find(|segment| !segment.is_empty())?;
        if owner.is_empty() {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

/// Branch names to try, preferred first, without duplicates
#[must_use]
pub fn branch_candidates(preferred: Option<&str>) -> Vec<String> {
    let mut branches: Vec<String> = Vec::new();
    for branch in preferred.into_iter().chain(FALLBACK_BRANCHES.iter().copied()) {
        if !branch.is_empty() && !branches.iter().any(|b| b == branch) {
            branches.push(branch.to_string());
        }
    }
    branches
}

/// Raw-content URL for a file on a branch
#[must_use]
pub fn raw_url(repo: &RepoRef, branch: &str, path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        repo.owner, repo.repo, branch, path
    )
}

/// Blob paths of a tree API response, in listing order.
///
/// Only `blob` items with a string `path` are kept. A response without a
/// `tree` array yields nothing.
pub fn tree_paths(response: &Value) -> impl Iterator<Item = &str> {
    response
        .get("tree")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some("blob"))
        .filter_map(|item| item.get("path").and_then(Value::as_str))
}

/// Turn a tree API response into path entries with raw URLs
#[must_use]
pub fn tree_listing(response: &Value, repo: &RepoRef, branch: &str) -> Vec<PathEntry> {
    tree_paths(response)
        .map(|path| PathEntry::new(path, raw_url(repo, branch, path)))
        .collect()
}
