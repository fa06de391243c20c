//! Test utilities for building scratch directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{Local, TimeZone};
use tempfile::TempDir;

/// A temporary directory populated with files for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file whose modification time is noon (local time) on the given date.
    pub fn add_file_dated(&self, path: &str, content: &str, y: i32, m: u32, d: u32) -> PathBuf {
        let full_path = self.add_file(path, content);
        set_modified_date(&full_path, y, m, d);
        full_path
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Set a file's modification time to noon (local time) on the given date.
pub fn set_modified_date(path: &Path, y: i32, m: u32, d: u32) {
    let when = Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("Invalid local date");
    let file = File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file for mtime update");
    file.set_modified(SystemTime::from(when))
        .expect("Failed to set mtime");
}
