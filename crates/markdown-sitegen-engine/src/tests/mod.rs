//! Shared fixtures for filesystem tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const TEST_TEMPLATE: &str =
    "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write `content` to `name` below `dir`, creating intermediate folders.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}
