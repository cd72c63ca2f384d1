//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temp directory with empty `dirty/` and `clean/` pattern folders.
pub fn temp_pattern_dirs() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("dirty")).unwrap();
    fs::create_dir(dir.path().join("clean")).unwrap();
    dir
}

/// Returns the `dirty/` and `clean/` paths inside a temp root.
pub fn dirs(root: &Path) -> (PathBuf, PathBuf) {
    (root.join("dirty"), root.join("clean"))
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_pattern_dirs();
/// create_tree(tmp.path(), &[
///     ("dirty/words.txt", "cat\ndog\n"),
///     ("clean/ok.txt", "cat food\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
