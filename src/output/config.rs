//! Output configuration types

use std::path::PathBuf;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Directory that JSON and Markdown reports are written into
    pub report_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            report_dir: PathBuf::from("."),
        }
    }
}
