//! Markdown report output
//!
//! The report is a title, a header block (generation time, total count)
//! and a four-column table, suitable for pasting into docs or tickets.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ReportError;
use crate::scan::FileRecord;

use super::utils::{escape_cell, format_size, report_filename};

/// Render records as a Markdown document.
pub fn render_markdown(records: &[FileRecord], generated: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("# File Search Results\n\n");
    let _ = writeln!(out, "**Generated:** {}\n", generated.to_rfc2822());
    let _ = writeln!(out, "**Total Files Found:** {}\n", records.len());
    out.push_str("| Last Modified | Size | File Name | Full Path |\n");
    out.push_str("|---|---|---|---|\n");

    for record in records {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            record.last_modified,
            format_size(record.size_bytes),
            escape_cell(&record.name),
            escape_cell(&record.path.display().to_string())
        );
    }
    out
}

/// Write `output_<extensions>.md` into `dir`, replacing any existing file.
pub fn write_markdown(
    records: &[FileRecord],
    raw_extensions: Option<&str>,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_filename(raw_extensions, "md"));
    let document = render_markdown(records, Local::now());
    fs::write(&path, document).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote Markdown report");
    Ok(path)
}
