//! FileWalker - lazy enumeration of candidate files
//!
//! Shallow walks list the root directory once; deep walks use the `ignore`
//! crate's walker with every ignore-file and hidden-file rule switched off,
//! so every regular file below the root is a candidate.

use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use ignore::WalkBuilder;

use crate::error::ScanError;

use super::record::FileRecord;

/// Traversal depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Direct children of the root only
    #[default]
    Shallow,
    /// Every file at any depth
    Deep,
}

/// One step of a walk.
#[derive(Debug, Clone)]
pub enum Visit {
    /// A directory being entered (deep walks only)
    Directory(PathBuf),
    File(FileRecord),
}

pub struct FileWalker {
    root: PathBuf,
    mode: Traversal,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>, mode: Traversal) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Open the root and return the visit sequence.
    ///
    /// Fails if the root is missing, is not a directory, or cannot be
    /// listed. Errors below the root never surface here; they are skipped
    /// while iterating.
    pub fn visits(&self) -> Result<Visits, ScanError> {
        let metadata =
            fs::metadata(&self.root).map_err(|e| ScanError::from_io(self.root.clone(), e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let listing =
            fs::read_dir(&self.root).map_err(|e| ScanError::from_io(self.root.clone(), e))?;

        let source = match self.mode {
            Traversal::Shallow => {
                let mut entries: Vec<_> = listing.filter_map(|e| e.ok()).collect();
                entries.sort_by_key(|a| a.file_name());
                Source::Shallow(entries.into_iter())
            }
            Traversal::Deep => Source::Deep(deep_walk(&self.root)),
        };

        tracing::debug!(root = %self.root.display(), mode = ?self.mode, "walk started");
        Ok(Visits { source, scanned: 0 })
    }
}

fn deep_walk(root: &Path) -> ignore::Walk {
    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

enum Source {
    Shallow(vec::IntoIter<fs::DirEntry>),
    Deep(ignore::Walk),
}

/// Lazy, single-pass sequence of visits.
///
/// Keeps a running count of the file records it has produced.
pub struct Visits {
    source: Source,
    scanned: usize,
}

impl Visits {
    /// Number of files yielded so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

impl Iterator for Visits {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        loop {
            let visit = match &mut self.source {
                Source::Shallow(entries) => shallow_visit(&entries.next()?),
                Source::Deep(walk) => match walk.next()? {
                    Ok(entry) => deep_visit(&entry),
                    Err(err) => {
                        tracing::debug!("skipping unreadable entry: {}", err);
                        None
                    }
                },
            };

            if let Some(visit) = visit {
                if matches!(visit, Visit::File(_)) {
                    self.scanned += 1;
                }
                return Some(visit);
            }
        }
    }
}

fn shallow_visit(entry: &fs::DirEntry) -> Option<Visit> {
    // Follows symlinks: a link to a file is reported, a link to a directory
    // or a dangling link is skipped
    let metadata = fs::metadata(entry.path()).ok()?;
    FileRecord::from_metadata(entry.path(), &metadata).map(Visit::File)
}

fn deep_visit(entry: &ignore::DirEntry) -> Option<Visit> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return Some(Visit::Directory(entry.path().to_path_buf()));
    }
    if !file_type.is_file() {
        return None;
    }
    let metadata = entry.metadata().ok()?;
    FileRecord::from_metadata(entry.path(), &metadata).map(Visit::File)
}
