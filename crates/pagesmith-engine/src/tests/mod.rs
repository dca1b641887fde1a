use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for file-system tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with the given bytes inside a test directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
