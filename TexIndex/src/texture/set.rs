//! Keyed accumulator shared by every discovery path

use indexmap::IndexMap;

use super::preview::select_preview;
use super::types::{TextureEntry, TextureFile, TextureKey};

/// Collects files into texture entries keyed by [`TextureKey`].
///
/// Entries keep the spelling of the first occurrence and first-seen order.
/// Colliding keys merge their file lists.
#[derive(Debug, Default)]
pub struct TextureSet {
    entries: IndexMap<TextureKey, TextureEntry>,
}

impl TextureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a file to the entry for (category, name), creating it if needed
    pub fn push_file(&mut self, category: &str, name: &str, file: TextureFile) {
        self.entries
            .entry(TextureKey::new(category, name))
            .or_insert_with(|| TextureEntry::new(name, category))
            .files
            .push(file);
    }

    /// Merge a whole entry. An existing entry keeps its preview unless it has none.
    pub fn push_entry(&mut self, entry: TextureEntry) {
        match self.entries.entry(entry.key()) {
            indexmap::map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.preview.is_empty() {
                    existing.preview = entry.preview;
                }
                existing.files.extend(entry.files);
            }
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    /// Finish the set: drop entries without files and fill missing previews
    /// with the best-scoring file's location. Order is first-seen.
    #[must_use]
    pub fn into_entries(self) -> Vec<TextureEntry> {
        self.entries
            .into_values()
            .filter(|entry| !entry.files.is_empty())
            .map(|mut entry| {
                if entry.preview.is_empty()
                    && let Some(best) = select_preview(&entry.files)
                {
                    entry.preview = best.location.clone();
                }
                entry
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_file_merges_case_insensitive_keys() {
        let mut set = TextureSet::new();
        set.push_file("Wood", "Oak", TextureFile::new("oak_ao.png", "1"));
        set.push_file(" wood", "OAK ", TextureFile::new("oak_basecolor.png", "2"));
        set.push_file("Stone", "Slate", TextureFile::new("slate_ao.png", "3"));
        assert_eq!(set.len(), 2);

        let entries = set.into_entries();
        assert_eq!(entries[0].name, "Oak");
        assert_eq!(entries[0].category, "Wood");
        assert_eq!(entries[0].files.len(), 2);
        assert_eq!(entries[0].preview, "2");
    }

    #[test]
    fn test_push_entry_keeps_existing_preview() {
        let mut first = TextureEntry::new("Oak", "Wood");
        first.preview = "thumb".to_string();
        first.files.push(TextureFile::new("oak_ao.png", "1"));

        let mut second = TextureEntry::new("oak", "wood");
        second.preview = "other".to_string();
        second.files.push(TextureFile::new("oak_normal.png", "2"));

        let mut set = TextureSet::new();
        set.push_entry(first);
        set.push_entry(second);

        let entries = set.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].preview, "thumb");
        assert_eq!(entries[0].files.len(), 2);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let mut set = TextureSet::new();
        set.push_entry(TextureEntry::new("Empty", "Void"));
        assert!(!set.is_empty());
        assert!(set.into_entries().is_empty());
    }
}
