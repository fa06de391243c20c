//! File metadata records produced by traversal

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Layout of the `last_modified` display string.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A regular file seen during traversal.
///
/// Serializes as `{name, path, last_modified, size_bytes}`; the raw
/// timestamp is kept for date matching only.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
    pub last_modified: String,
    #[serde(skip)]
    pub modified: DateTime<Local>,
    pub size_bytes: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, modified: DateTime<Local>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            name,
            last_modified: modified.format(DISPLAY_FORMAT).to_string(),
            path,
            modified,
            size_bytes,
        }
    }

    /// Build a record from filesystem metadata.
    ///
    /// Returns `None` for directories or when the platform cannot report a
    /// modification time.
    pub fn from_metadata(path: impl Into<PathBuf>, metadata: &Metadata) -> Option<Self> {
        if metadata.is_dir() {
            return None;
        }
        let modified: SystemTime = metadata.modified().ok()?;
        Some(Self::new(path, metadata.len(), DateTime::from(modified)))
    }

    /// Lowercased extension including the leading dot, or "" when there is none.
    pub fn extension(&self) -> String {
        file_extension(&self.name)
    }
}

/// Extension of a file name: everything from the last `.` on, lowercased.
///
/// A leading dot counts, so `.bashrc` has the extension `.bashrc`.
pub fn file_extension(name: &str) -> String {
    name.rfind('.')
        .map(|idx| name[idx..].to_lowercase())
        .unwrap_or_default()
}
