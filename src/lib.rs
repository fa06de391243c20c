//! filesift - find files by modification date and extension

pub mod error;
pub mod output;
pub mod progress;
pub mod scan;
pub mod search;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, ReportError, ScanError};
pub use output::{Console, OutputConfig, TableFormatter, format_size, report_filename};
pub use output::{write_json, write_markdown};
pub use progress::{LiveProgress, NoProgress, ScanProgress};
pub use scan::{
    DateFilter, ExtensionSet, FileRecord, FileWalker, Matcher, OutputFormat, SearchConfig,
    Traversal, Visit,
};
pub use search::{ScanStats, SearchOutcome, collect_matches, search};
