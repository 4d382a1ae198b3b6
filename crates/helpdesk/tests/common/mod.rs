use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `files` (relative path, content) into a fresh temporary directory
pub fn docs_tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        write_doc(temp.path(), name, content.as_bytes());
    }
    temp
}

pub fn write_doc(root: &Path, name: &str, bytes: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}
