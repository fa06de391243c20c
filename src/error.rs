//! Error types for scanning and report writing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised before or while opening the scan root.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while inspecting the root.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound(path)
        } else {
            ScanError::Unreadable { path, source }
        }
    }
}

/// Failure to persist a JSON or Markdown report.
///
/// These never abort the process: the scan has already finished by the
/// time a report is written.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level error for the command-line driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// True when stdout was closed by the reader, e.g. output piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
