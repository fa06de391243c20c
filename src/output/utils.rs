//! Shared utility functions for output formatting

/// Format a size in bytes using 1024-based units.
///
/// Bytes are shown as a bare integer; KB, MB and GB get two decimals.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Name of the report file for an extension list and file suffix.
///
/// `go,py` + `json` gives `output_go_py.json`; no list gives `output_all.<suffix>`.
pub fn report_filename(raw_extensions: Option<&str>, suffix: &str) -> String {
    format!("output_{}.{}", extension_token(raw_extensions), suffix)
}

/// Filename-safe token for an extension list.
fn extension_token(raw_extensions: Option<&str>) -> String {
    let parts: Vec<String> = raw_extensions
        .unwrap_or_default()
        .split(',')
        .map(|p| p.trim().trim_start_matches('.').to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        "all".to_string()
    } else {
        parts.join("_")
    }
}

/// Escape a value for use inside a Markdown table cell.
pub fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
