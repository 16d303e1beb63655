//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (for URLs and `index.json`)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Get relative path and normalize separators
pub fn relative_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<String> {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .ok()
        .map(normalize_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_path() {
        let file = PathBuf::from("site").join("textures").join("Wood").join("oak.png");
        assert_eq!(relative_path(&file, Path::new("site")).as_deref(), Some("textures/Wood/oak.png"));
        assert_eq!(relative_path(&file, Path::new("")).as_deref(), Some("site/textures/Wood/oak.png"));
        assert_eq!(relative_path(&file, Path::new("elsewhere")), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("textures\\Wood\\oak.png"), "textures/Wood/oak.png");
    }
}
