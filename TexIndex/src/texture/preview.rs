//! Preview candidate scoring

use super::types::TextureFile;

/// Anything that can be ranked as a preview candidate by its file name.
pub trait PreviewCandidate {
    /// File name used for scoring and tie-breaking
    fn candidate_name(&self) -> &str;
}

impl PreviewCandidate for str {
    fn candidate_name(&self) -> &str {
        self
    }
}

impl PreviewCandidate for String {
    fn candidate_name(&self) -> &str {
        self
    }
}

impl PreviewCandidate for TextureFile {
    fn candidate_name(&self) -> &str {
        &self.name
    }
}

impl<T: PreviewCandidate + ?Sized> PreviewCandidate for &T {
    fn candidate_name(&self) -> &str {
        (**self).candidate_name()
    }
}

/// Score a file name as a preview candidate. Higher is better.
#[must_use]
pub fn preview_score(name: &str) -> i32 {
    let lower = name.trim().to_lowercase();
    let mut score = 0;
    if ["basecolor", "albedo", "diffuse"].iter().any(|k| lower.contains(k)) {
        score += 12;
    }
    if lower.contains("preview") || lower.contains("thumb") {
        score += 8;
    }
    if lower.contains("normal") {
        score -= 2;
    }
    score
}

/// Pick the best preview candidate: highest score, ties broken by the
/// lexicographically smallest name. `None` only for empty input.
pub fn select_preview<I>(candidates: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PreviewCandidate,
{
    candidates.into_iter().min_by(|a, b| {
        let (a, b) = (a.candidate_name(), b.candidate_name());
        preview_score(b).cmp(&preview_score(a)).then_with(|| a.cmp(b))
    })
}
