//! Discovery of documentation files under a root directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions (lowercase, without the dot) treated as documentation
pub const DOC_EXTENSIONS: [&str; 3] = ["md", "rst", "txt"];

/// Absolute form of a configured root. Existing paths are canonicalized;
/// missing ones are joined onto the current directory.
pub fn resolve_root(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Whether the path carries one of the documentation extensions
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            DOC_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively list documentation files under `root`.
///
/// A missing root, or one that is not a directory, yields no files. Entries
/// are visited in file-name order within each directory so repeated scans of
/// an unchanged tree agree.
pub fn scan_documents(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "documentation root missing");
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_document(path) {
            files.push(path.to_path_buf());
        }
    }
    files
}
