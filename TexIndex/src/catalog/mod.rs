//! Catalog queries over discovered textures
//!
//! A [`Catalog`] is an immutable snapshot of one discovery run. Filtering,
//! category chips, card summaries and pagination are pure queries on it, so
//! whatever owns the view state passes a [`CatalogFilter`] in rather than
//! mutating shared data.

use crate::texture::{TextureEntry, UNCATEGORIZED, normalize_key};

/// Cards per page in the gallery grid.
pub const PAGE_SIZE: usize = 50;

/// Number of distinct roles listed in a card summary.
const SUMMARY_ROLES: usize = 4;

/// One selectable category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Normalized key used for filtering
    pub key: String,
    /// Display label (first-seen spelling)
    pub label: String,
}

/// View filter supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Normalized category key, `None` for all categories
    pub category: Option<String>,
    /// Free-text query over name, category and roles
    pub query: String,
}

impl CatalogFilter {
    #[must_use]
    pub fn new(category: Option<&str>, query: &str) -> Self {
        Self {
            category: category.map(normalize_key).filter(|key| !key.is_empty()),
            query: normalize_key(query),
        }
    }
}

/// Immutable snapshot of discovered textures
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<TextureEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<TextureEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for entry in &self.entries {
            let key = normalize_key(&entry.category);
            let key = if key.is_empty() { UNCATEGORIZED.to_string() } else { key };
            if !categories.iter().any(|c| c.key == key) {
                let label = if entry.category.trim().is_empty() {
                    UNCATEGORIZED.to_string()
                } else {
                    entry.category.clone()
                };
                categories.push(Category { key, label });
            }
        }
        categories
    }

    /// Entries matching the filter, in catalog order
    #[must_use]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&TextureEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|key| normalize_key(&entry.category) == *key)
            })
            .filter(|entry| filter.query.is_empty() || haystack(entry).contains(&filter.query))
            .collect()
    }
}

fn haystack(entry: &TextureEntry) -> String {
    let roles: Vec<&str> = entry.roles().map(|role| role.as_str()).collect();
    format!("{} {} {}", entry.name, entry.category, roles.join(" ")).to_lowercase()
}

/// One-line card summary: file count and up to four distinct roles
#[must_use]
pub fn summary(entry: &TextureEntry) -> String {
    let roles: Vec<&str> = entry
        .distinct_roles()
        .into_iter()
        .take(SUMMARY_ROLES)
        .map(|role| role.as_str())
        .collect();
    let more = if entry.files.len() > roles.len() { ", ..." } else { "" };
    format!("{} maps: {}{}", entry.files.len(), roles.join(", "), more)
}

/// Number of pages for `len` items; at least one
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Items on a 1-based page; the page is clamped into range
#[must_use]
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = page.clamp(1, page_count(items.len(), page_size));
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureFile;

    fn entry(name: &str, category: &str, files: &[&str]) -> TextureEntry {
        let mut entry = TextureEntry::new(name, category);
        entry.files = files.iter().map(|f| TextureFile::new(*f, *f)).collect();
        entry
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            entry("Oak", "Wood", &["oak_basecolor.png", "oak_normal.png"]),
            entry("Pine", "wood ", &["pine_height.png"]),
            entry("Slate", "Stone", &["slate_ao.png"]),
        ])
    }

    #[test]
    fn test_categories_dedup_by_key() {
        let categories = catalog().categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], Category { key: "wood".into(), label: "Wood".into() });
        assert_eq!(categories[1].key, "stone");
    }

    #[test]
    fn test_filter_by_category_and_query() {
        let catalog = catalog();
        let names = |filter: &CatalogFilter| -> Vec<String> {
            catalog.filter(filter).iter().map(|e| e.name.clone()).collect()
        };

        assert_eq!(names(&CatalogFilter::default()).len(), 3);
        assert_eq!(names(&CatalogFilter::new(Some("WOOD"), "")), vec!["Oak", "Pine"]);
        assert_eq!(names(&CatalogFilter::new(None, "displacement")), vec!["Pine"]);
        assert_eq!(names(&CatalogFilter::new(Some("wood"), " SLATE ")), Vec::<String>::new());
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(&entry("Oak", "Wood", &["a_ao.png", "b_ao.png"])), "2 maps: ao, ...");
        assert_eq!(
            summary(&entry("Oak", "Wood", &["a_col.png", "a_nor.png"])),
            "2 maps: basecolor, normal"
        );
        let many = entry(
            "M",
            "C",
            &["m_col.png", "m_nrm.png", "m_rough.png", "m_metal.png", "m_ao.png"],
        );
        assert_eq!(summary(&many), "5 maps: basecolor, normal, roughness, metalness, ...");
    }

    #[test]
    fn test_pagination() {
        let items: Vec<usize> = (0..120).collect();
        assert_eq!(page_count(items.len(), PAGE_SIZE), 3);
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page(&items, 1, PAGE_SIZE).len(), 50);
        assert_eq!(page(&items, 3, PAGE_SIZE), &items[100..]);
        assert_eq!(page(&items, 9, PAGE_SIZE), &items[100..]);
        assert_eq!(page(&items, 0, PAGE_SIZE)[0], 0);
        assert!(page(&Vec::<usize>::new(), 1, PAGE_SIZE).is_empty());
    }
}
