//! Test harness for filesift integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use filesift::test_utils::TestDir;

/// Run the binary in `dir` and return (stdout, stderr, success).
pub fn run_filesift(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_filesift");
    let output = Command::new(binary)
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run filesift");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Directory with `a.go` and `sub/c.go` dated 2024-01-15 and `b.py` dated 2023-06-01.
pub fn sample_tree() -> TestDir {
    let dir = TestDir::new();
    dir.add_file_dated("a.go", "package a", 2024, 1, 15);
    dir.add_file_dated("b.py", "print('b')", 2023, 6, 1);
    dir.add_file_dated("sub/c.go", "package c", 2024, 1, 15);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_sets_mtime() {
        let dir = TestDir::new();
        let path = dir.add_file_dated("old.txt", "x", 2001, 2, 3);
        let modified: chrono::DateTime<chrono::Local> =
            std::fs::metadata(path).unwrap().modified().unwrap().into();
        assert_eq!(modified.format("%Y-%m-%d").to_string(), "2001-02-03");
    }
}
