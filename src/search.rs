//! Search driver: walk, match, accumulate

use std::time::{Duration, Instant};

use crate::error::ScanError;
use crate::progress::ScanProgress;
use crate::scan::{FileRecord, FileWalker, Matcher, SearchConfig, Visit, Visits};

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub scanned: usize,
    pub matched: usize,
    pub elapsed: Duration,
}

/// Matched records in traversal order, plus counters.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub records: Vec<FileRecord>,
    pub stats: ScanStats,
}

/// Run a complete search for `config`.
pub fn search(
    config: &SearchConfig,
    progress: &mut dyn ScanProgress,
) -> Result<SearchOutcome, ScanError> {
    let visits = FileWalker::new(&config.root, config.traversal()).visits()?;
    Ok(collect_matches(visits, &Matcher::from_config(config), progress))
}

/// Drain `visits`, keeping the records `matcher` accepts.
pub fn collect_matches(
    mut visits: Visits,
    matcher: &Matcher,
    progress: &mut dyn ScanProgress,
) -> SearchOutcome {
    let started = Instant::now();
    let mut records = Vec::new();

    while let Some(visit) = visits.next() {
        match visit {
            Visit::Directory(path) => progress.directory(&path),
            Visit::File(record) => {
                progress.checking(&record.path, visits.scanned());
                if matcher.matches(&record) {
                    progress.matched(&record.path, records.len() + 1);
                    records.push(record);
                }
            }
        }
    }
    progress.finish();

    let stats = ScanStats {
        scanned: visits.scanned(),
        matched: records.len(),
        elapsed: started.elapsed(),
    };
    tracing::info!(
        scanned = stats.scanned,
        matched = stats.matched,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "scan complete"
    );

    SearchOutcome { records, stats }
}
