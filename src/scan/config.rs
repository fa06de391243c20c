//! Configuration types for a search

use std::path::PathBuf;

use clap::ValueEnum;

use super::filter::{DateFilter, ExtensionSet};
use super::walker::Traversal;

/// How matched files are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table printed to the console
    #[default]
    Tabular,
    /// Pretty-printed JSON report file
    Json,
    /// Markdown report file
    #[value(name = "md", alias = "markdown")]
    Markdown,
}

impl OutputFormat {
    /// File extension of the report, or `None` for console output.
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            OutputFormat::Tabular => None,
            OutputFormat::Json => Some("json"),
            OutputFormat::Markdown => Some("md"),
        }
    }

    /// Whether this format writes a report file (and shows live progress).
    pub fn writes_file(self) -> bool {
        self.file_suffix().is_some()
    }

    /// Human-readable name used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Tabular => "Table",
            OutputFormat::Json => "JSON",
            OutputFormat::Markdown => "Markdown",
        }
    }
}

/// Everything a search needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub root: PathBuf,
    /// Day of month; `None` or zero leaves the day unconstrained
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Combined `day/month/year` filter, overrides the fields above when well-formed
    pub exact_date: Option<String>,
    pub recursive: bool,
    /// Extension list as typed, used to name report files
    pub raw_extensions: Option<String>,
    pub extensions: ExtensionSet,
    pub output: OutputFormat,
}

impl SearchConfig {
    /// Create a config for `root` with no filters.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Set the extension filter from a comma-separated list.
    pub fn with_extensions(mut self, raw: &str) -> Self {
        self.extensions = ExtensionSet::parse(raw);
        self.raw_extensions = Some(raw.to_string());
        self
    }

    pub fn traversal(&self) -> Traversal {
        if self.recursive {
            Traversal::Deep
        } else {
            Traversal::Shallow
        }
    }

    /// Resolve the date options into the filter that will be applied.
    pub fn date_filter(&self) -> DateFilter {
        DateFilter::new(self.exact_date.as_deref(), self.day, self.month, self.year)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            day: None,
            month: None,
            year: None,
            exact_date: None,
            recursive: false,
            raw_extensions: None,
            extensions: ExtensionSet::default(),
            output: OutputFormat::Tabular,
        }
    }
}
