//! Directory scanning and file matching
//!
//! - `config` - search options built from the command line
//! - `record` - per-file metadata records
//! - `walker` - shallow and deep traversal as a lazy iterator
//! - `filter` - extension and date matching

mod config;
mod filter;
mod record;
mod walker;

pub use config::{OutputFormat, SearchConfig};
pub use filter::{DateFilter, ExtensionSet, Matcher};
pub use record::{DISPLAY_FORMAT, FileRecord, file_extension};
pub use walker::{FileWalker, Traversal, Visit, Visits};
