//! Prebuilt index normalization
//!
//! `index.json` is untrusted: it may come from an older generator, be
//! hand-edited, or be truncated. Every field is coerced individually and
//! anything unusable is dropped, so the result is always well-typed.

use serde_json::{Map, Value};

use crate::texture::{
    DEFAULT_TEXTURE_NAME, MapRole, TextureEntry, TextureFile, TextureSet, UNCATEGORIZED,
    is_reserved_preview,
};

/// Coerce a scalar to a trimmed-non-empty string
fn coerce_string(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() { None } else { Some(text) }
}

/// First field among `keys` that coerces to a string
fn field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| coerce_string(object.get(*key)))
}

/// Locate the item array: the payload itself, or its `items`/`textures` field
fn item_array(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(object) => ["items", "textures"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

fn normalize_file(raw: &Value) -> Option<TextureFile> {
    let object = raw.as_object()?;
    let name = field(object, &["name"])?;
    if is_reserved_preview(&name) {
        return None;
    }
    let location = field(object, &["location", "src", "url"])?;

    let mut file = TextureFile::new(name, location);
    if let Some(tag) = field(object, &["role", "type"]) {
        file = file.with_role(MapRole::from_tag(&tag));
    }
    if let Some(relative_path) = field(object, &["relativePath", "relInTexture"]) {
        file = file.with_relative_path(relative_path);
    }
    Some(file)
}

fn normalize_entry(raw: &Value) -> Option<TextureEntry> {
    let object = raw.as_object()?;
    let files: Vec<TextureFile> = object
        .get("files")
        .and_then(Value::as_array)?
        .iter()
        .filter_map(normalize_file)
        .collect();

    if files.is_empty() {
        return None;
    }

    let mut entry = TextureEntry::new(
        field(object, &["name"]).unwrap_or_else(|| DEFAULT_TEXTURE_NAME.to_string()),
        field(object, &["category"]).unwrap_or_else(|| UNCATEGORIZED.to_string()),
    );
    entry.preview = field(object, &["preview"]).unwrap_or_default();
    entry.files = files;
    Some(entry)
}

/// Coerce an untrusted index payload into texture entries.
///
/// Accepts an array of items, or an object carrying `items` or `textures`.
/// Files without a location and reserved preview files are dropped, then
/// entries left without files. Duplicate (category, name) pairs merge.
/// Never fails; returns an empty list when nothing survives.
#[must_use]
pub fn normalize(raw: &Value) -> Vec<TextureEntry> {
    let Some(items) = item_array(raw) else {
        tracing::debug!("Index payload has no item array");
        return Vec::new();
    };

    let mut set = TextureSet::new();
    let mut rejected = 0usize;
    for item in items {
        match normalize_entry(item) {
            Some(entry) => set.push_entry(entry),
            None => rejected += 1,
        }
    }

    let entries = set.into_entries();
    tracing::debug!(
        "Normalized {} index items into {} textures ({} rejected)",
        items.len(),
        entries.len(),
        rejected
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_minimal_item() {
        let entries = normalize(&json!({
            "items": [{ "name": "X", "files": [{ "name": "x.png", "src": "http://a/x.png" }] }]
        }));

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "X");
        assert_eq!(entry.category, UNCATEGORIZED);
        assert_eq!(entry.preview, "http://a/x.png");
        assert_eq!(entry.files[0].role, crate::texture::classify("x.png"));
        assert_eq!(entry.files[0].location, "http://a/x.png");
        assert_eq!(entry.files[0].relative_path, "x.png");
    }

    #[test]
    fn test_normalize_garbage_is_empty() {
        assert!(normalize(&json!(42)).is_empty());
        assert!(normalize(&json!("textures")).is_empty());
        assert!(normalize(&json!(null)).is_empty());
        assert!(normalize(&json!({ "items": "nope" })).is_empty());
    }

    #[test]
    fn test_normalize_accepts_bare_array_and_textures_field() {
        let item = json!({ "name": "A", "category": "C", "files": [{ "name": "a_ao.png", "location": "a" }] });
        assert_eq!(normalize(&json!([item.clone()])).len(), 1);
        assert_eq!(normalize(&json!({ "textures": [item] })).len(), 1);
    }

    #[test]
    fn test_normalize_field_aliases_and_coercion() {
        let entries = normalize(&json!([{
            "name": 7,
            "category": "Metal",
            "preview": "textures/Metal/7/thumb.webp",
            "files": [
                { "name": "plate.png", "type": "gloss", "url": "u1", "relInTexture": "2k/plate.png" },
                { "name": "plate_nrm.png", "role": "normal", "location": "u2", "relativePath": "" }
            ]
        }]));

        let entry = &entries[0];
        assert_eq!(entry.name, "7");
        assert_eq!(entry.preview, "textures/Metal/7/thumb.webp");
        assert_eq!(entry.files[0].role, MapRole::Other("gloss".to_string()));
        assert_eq!(entry.files[0].relative_path, "2k/plate.png");
        assert_eq!(entry.files[1].role, MapRole::Normal);
        assert_eq!(entry.files[1].relative_path, "plate_nrm.png");
    }

    #[test]
    fn test_normalize_drops_bad_files_and_entries() {
        let entries = normalize(&json!({ "items": [
            "not an object",
            { "name": "NoFiles" },
            { "name": "AllBad", "files": [
                { "name": "a.png" },
                { "name": "thumb.webp", "src": "t" },
                { "src": "nameless" },
                { "name": "b.png", "src": "   " }
            ]},
            { "name": "Good", "files": [{ "name": "g.png", "src": "g" }, 5] }
        ]}));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Good");
        assert_eq!(entries[0].files.len(), 1);
    }

    #[test]
    fn test_normalize_merges_duplicate_keys() {
        let entries = normalize(&json!([
            { "name": "Oak", "category": "Wood", "files": [{ "name": "a.png", "src": "a" }] },
            { "name": "oak ", "category": "WOOD", "files": [{ "name": "b.png", "src": "b" }] }
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].files.len(), 2);
    }
}
