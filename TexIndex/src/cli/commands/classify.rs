//! CLI command for classifying file names

use crate::texture::{classify, preview_score};

pub fn execute(names: &[String]) -> anyhow::Result<()> {
    let width = names.iter().map(String::len).max().unwrap_or(0);
    for name in names {
        println!(
            "{name:<width$} -> {:<14} (preview score {})",
            classify(name).as_str(),
            preview_score(name)
        );
    }
    Ok(())
}
