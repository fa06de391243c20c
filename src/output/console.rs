//! Colored status lines and the end-of-scan summary

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::{SearchConfig, Traversal};
use crate::search::ScanStats;

/// Human-oriented status output on stdout.
pub struct Console {
    stdout: StandardStream,
}

impl Console {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        self.line(Color::Blue, "»", msg)
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        self.line(Color::Green, "✓", msg)
    }

    pub fn warning(&mut self, msg: &str) -> io::Result<()> {
        self.line(Color::Yellow, "!", msg)
    }

    fn line(&mut self, color: Color, marker: &str, msg: &str) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.stdout, "{} {}", marker, msg)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }

    /// Describe what is about to be scanned.
    pub fn search_header(&mut self, config: &SearchConfig) -> io::Result<()> {
        self.info(&format!("Target: {}", config.root.display()))?;
        match config.traversal() {
            Traversal::Deep => self.info("Mode: deep scan (recursive)")?,
            Traversal::Shallow => self.info("Mode: flat scan (current folder only)")?,
        }
        if !config.extensions.is_empty() {
            let raw = config.raw_extensions.as_deref().unwrap_or_default();
            self.info(&format!("Filter: {} files", raw))?;
        }
        let dates = config.date_filter();
        if !dates.is_unconstrained() {
            self.info(&format!("Date filter: {}", dates))?;
        }
        writeln!(self.stdout)
    }

    pub fn summary(&mut self, stats: &ScanStats) -> io::Result<()> {
        writeln!(self.stdout)?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::White)).set_bold(true))?;
        writeln!(self.stdout, "Scan complete")?;
        self.stdout.reset()?;
        writeln!(self.stdout, "  Files scanned: {}", stats.scanned)?;
        writeln!(self.stdout, "  Matches found: {}", stats.matched)?;
        writeln!(self.stdout, "  Time taken:    {}", format_elapsed(stats.elapsed))?;
        writeln!(self.stdout)
    }
}

/// Elapsed time rounded to whole milliseconds, e.g. `12ms` or `1.204s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = (elapsed.as_micros() + 500) / 1000;
    format!("{:?}", Duration::from_millis(millis as u64))
}
