//! Corpus loading.
//!
//! Documents are named by their path relative to the corpus root, using `/`
//! as the separator, so the same name can later be served from `/static/`.

use crate::index::word_index::WordIndex;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Splits `text` into lowercase words on every non-alphanumeric character.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Records every word of `text` as occurring in `doc`.
pub fn index_text(index: &mut WordIndex, doc: &str, text: &str) {
    for word in tokenize(text) {
        index.record(&word, doc);
    }
}

/// Walks `root` recursively and indexes every readable UTF-8 file.
///
/// Returns the number of documents indexed.
pub fn load_corpus(root: &Path, index: &mut WordIndex) -> Result<usize> {
    let mut loaded = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking corpus {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable document");
                continue;
            }
        };

        let doc = document_name(root, path);
        index_text(index, &doc, &text);
        loaded += 1;
        tracing::debug!(doc = %doc, "Indexed document");
    }

    tracing::info!(
        documents = loaded,
        words = index.num_words(),
        root = %root.display(),
        "Corpus loaded"
    );
    Ok(loaded)
}

fn document_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
