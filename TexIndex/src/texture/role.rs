//! Material-map role classification from file names

use std::fmt;

use serde::{Serialize, Serializer};

/// Tag returned when a file name has no usable token at all.
pub const FALLBACK_ROLE: &str = "map";

/// Functional purpose of one image file within a texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapRole {
    BaseColor,
    Normal,
    Roughness,
    Metalness,
    Ao,
    Displacement,
    /// Free-form tag taken from the file name when no alias matched.
    Other(String),
}

/// Alias tables in declared priority order. The first role whose aliases
/// intersect the name's tokens wins.
const ROLE_ALIASES: [(MapRole, &[&str]); 6] = [
    (MapRole::BaseColor, &["basecolor", "albedo", "diffuse", "color", "col"]),
    (MapRole::Normal, &["normal", "nrm", "nor"]),
    (MapRole::Roughness, &["roughness", "rough"]),
    (MapRole::Metalness, &["metalness", "metallic", "metal"]),
    (MapRole::Ao, &["ao", "ambientocclusion", "occlusion"]),
    (MapRole::Displacement, &["displacement", "height", "disp"]),
];

impl MapRole {
    /// Tag string used in index artifacts and listings
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BaseColor => "basecolor",
            Self::Normal => "normal",
            Self::Roughness => "roughness",
            Self::Metalness => "metalness",
            Self::Ao => "ao",
            Self::Displacement => "displacement",
            Self::Other(tag) => tag,
        }
    }

    /// Parse a stored tag. Unknown tags are kept verbatim as [`MapRole::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        ROLE_ALIASES
            .iter()
            .find(|(role, _)| role.as_str() == tag)
            .map_or_else(|| Self::Other(tag.to_string()), |(role, _)| role.clone())
    }

    /// Whether this is one of the six fixed roles
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for MapRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MapRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Strip the final `.ext` from a file name.
///
/// A trailing dot with nothing after it is not an extension.
pub(crate) fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c == '.' || c.is_whitespace()
}

/// Derive the material-map role of a file from its name.
///
/// The stem is split on runs of `_`, `-`, `.` and whitespace and lower-cased.
/// When no alias matches, the last token is returned as a free tag, or
/// [`FALLBACK_ROLE`] when that token is empty.
#[must_use]
pub fn classify(file_name: &str) -> MapRole {
    let stem = strip_extension(file_name).trim().to_lowercase();
    let tokens: Vec<&str> = stem.split(is_separator).collect();

    for (role, aliases) in &ROLE_ALIASES {
        if tokens.iter().any(|token| aliases.contains(token)) {
            return role.clone();
        }
    }

    match tokens.last() {
        Some(last) if !last.is_empty() => MapRole::Other((*last).to_string()),
        _ => MapRole::Other(FALLBACK_ROLE.to_string()),
    }
}
