//! CLI entry point for filesift

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use filesift::{
    Console, Error, ExtensionSet, FileWalker, LiveProgress, Matcher, NoProgress, OutputConfig,
    OutputFormat, SearchConfig, SearchOutcome, TableFormatter, collect_matches, write_json,
    write_markdown,
};
use tracing_subscriber::EnvFilter;

/// Files between live progress refreshes during a deep scan.
const DEEP_PROGRESS_INTERVAL: usize = 50;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filesift")]
#[command(about = "Find files by modification date and extension")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Day of month to match (1-31)
    #[arg(short = 'd', long = "day", value_name = "DAY")]
    day: Option<u32>,

    /// Month to match (1-12)
    #[arg(short = 'm', long = "month", value_name = "MONTH")]
    month: Option<u32>,

    /// Year to match (e.g. 2024)
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    year: Option<i32>,

    /// Exact date as DAY/MONTH/YEAR (e.g. 24/1/2026)
    /// Overrides --day, --month and --year when it parses
    #[arg(short = 'a', long = "date", visible_alias = "all", value_name = "D/M/Y")]
    date: Option<String>,

    /// Descend into subdirectories
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// Comma separated extensions (e.g. go,py,txt)
    #[arg(short = 'e', long = "ext", visible_alias = "ex", value_name = "LIST")]
    extensions: Option<String>,

    /// Output format: tabular (console), json or md (written to the current directory)
    #[arg(short = 'o', long = "output", value_name = "FORMAT", default_value = "tabular")]
    output: OutputFormat,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            root: self.path.clone(),
            day: self.day,
            month: self.month,
            year: self.year,
            exact_date: self.date.clone(),
            recursive: self.recursive,
            raw_extensions: self.extensions.clone(),
            extensions: self
                .extensions
                .as_deref()
                .map(ExtensionSet::parse)
                .unwrap_or_default(),
            output: self.output,
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info,ignore=warn"),
        2 => EnvFilter::new("debug,ignore=warn"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.search_config();
    let output = OutputConfig {
        use_color: should_use_color(args.color),
        report_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if let Err(e) = run(&config, &output) {
        // The scan finished; a closed stdout is not a failure
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("filesift: {}", e);
        process::exit(1);
    }
}

fn run(config: &SearchConfig, output: &OutputConfig) -> Result<(), Error> {
    // Root problems are fatal and reported before anything else is printed
    let visits = FileWalker::new(&config.root, config.traversal()).visits()?;

    let mut console = Console::new(output.use_color);
    console.search_header(config)?;

    let matcher = Matcher::from_config(config);
    let SearchOutcome { records, stats } = if config.output.writes_file() {
        let every = if config.recursive {
            DEEP_PROGRESS_INTERVAL
        } else {
            1
        };
        collect_matches(visits, &matcher, &mut LiveProgress::new(every))
    } else {
        collect_matches(visits, &matcher, &mut NoProgress)
    };

    console.summary(&stats)?;

    if records.is_empty() {
        console.warning("No files found matching your criteria.")?;
        return Ok(());
    }

    let raw_extensions = config.raw_extensions.as_deref();
    let saved = match config.output {
        OutputFormat::Tabular => {
            console.success("Search results:")?;
            TableFormatter::new(output.use_color).print(&records)?;
            return Ok(());
        }
        OutputFormat::Json => write_json(&records, raw_extensions, &output.report_dir),
        OutputFormat::Markdown => write_markdown(&records, raw_extensions, &output.report_dir),
    };

    // A failed report does not fail the run: the scan itself succeeded
    match saved {
        Ok(path) => console.success(&format!(
            "{} saved to: {}",
            config.output.label(),
            path.display()
        ))?,
        Err(e) => eprintln!("filesift: {}", e),
    }
    Ok(())
}
