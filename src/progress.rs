//! Live progress reporting during a scan
//!
//! Progress is cosmetic: nothing downstream reads it. The console table
//! format uses `NoProgress` so the transient line never collides with the
//! final render.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const MAX_DIR_WIDTH: usize = 60;
const MAX_NAME_WIDTH: usize = 40;

/// Hooks called by the search driver as traversal proceeds.
pub trait ScanProgress {
    fn directory(&mut self, _path: &Path) {}

    fn checking(&mut self, _path: &Path, _scanned: usize) {}

    fn matched(&mut self, _path: &Path, _matched: usize) {}

    fn finish(&mut self) {}
}

/// Reports nothing.
pub struct NoProgress;

impl ScanProgress for NoProgress {}

/// Spinner on stderr with a transient status line.
///
/// Matches are printed as permanent lines above the spinner. The status
/// line is refreshed on every directory and on every `every`-th file.
pub struct LiveProgress {
    bar: ProgressBar,
    every: usize,
}

impl LiveProgress {
    pub fn new(every: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        Self::with_bar(bar, every)
    }

    fn with_bar(bar: ProgressBar, every: usize) -> Self {
        Self {
            bar,
            every: every.max(1),
        }
    }

    /// A reporter that draws nothing.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden(), 1)
    }
}

impl ScanProgress for LiveProgress {
    fn directory(&mut self, path: &Path) {
        let shown = truncate_front(&path.display().to_string(), MAX_DIR_WIDTH);
        self.bar.set_message(format!("Scanning: {}", shown));
    }

    fn checking(&mut self, path: &Path, scanned: usize) {
        if scanned % self.every != 0 {
            return;
        }
        self.bar.set_message(format!(
            "Checking: {:<width$} [Scanned: {}]",
            truncate_back(&display_name(path), MAX_NAME_WIDTH),
            scanned,
            width = MAX_NAME_WIDTH
        ));
    }

    fn matched(&mut self, path: &Path, matched: usize) {
        self.bar.println(format!(
            "✓ Match: {:<width$} [Found: {}]",
            truncate_back(&display_name(path), MAX_NAME_WIDTH),
            matched,
            width = MAX_NAME_WIDTH
        ));
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Keep the tail of `s`, prefixing "..." when it is longer than `max` chars.
fn truncate_front(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let tail: String = s.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

/// Keep the head of `s`, appending "..." when it is longer than `max` chars.
fn truncate_back(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head)
}
