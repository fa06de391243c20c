//! JSON report output

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::scan::FileRecord;

use super::utils::report_filename;

/// Serialize records as a pretty-printed JSON array.
pub fn render_json(records: &[FileRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write `output_<extensions>.json` into `dir`, replacing any existing file.
pub fn write_json(
    records: &[FileRecord],
    raw_extensions: Option<&str>,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_filename(raw_extensions, "json"));
    let mut json = render_json(records)?;
    json.push('\n');
    fs::write(&path, json).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote JSON report");
    Ok(path)
}
