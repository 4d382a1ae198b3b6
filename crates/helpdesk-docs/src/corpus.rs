//! Corpus-wide search: per-document top snippets merged into a global ranking

use crate::scanner::{resolve_root, scan_documents};
use crate::scorer::{score_file, tokenize, Snippet, MAX_SNIPPETS_PER_DOCUMENT};
use std::path::{Path, PathBuf};

/// A documentation tree rooted at one directory.
///
/// Holds nothing but the root: every call rescans the tree and rereads each
/// file, so results always reflect the current state of the disk.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: resolve_root(root.as_ref()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Documentation files currently under the root
    pub fn documents(&self) -> Vec<PathBuf> {
        scan_documents(&self.root)
    }

    /// Best `max_results` snippets for `query` across all documents.
    ///
    /// Each document contributes at most `MAX_SNIPPETS_PER_DOCUMENT`; the
    /// merged list is ordered by score with ties kept in scan order.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<Snippet> {
        let tokens = tokenize(query);
        let files = self.documents();

        let mut all: Vec<Snippet> = files
            .iter()
            .flat_map(|f| score_file(f, &tokens, MAX_SNIPPETS_PER_DOCUMENT))
            .collect();

        all.sort_by(|a, b| b.score.cmp(&a.score));
        all.truncate(max_results);

        tracing::debug!(
            documents = files.len(),
            results = all.len(),
            "documentation search finished"
        );
        all
    }
}
