//! Result formatting and display
//!
//! - `config` - output configuration types
//! - `utils` - size formatting, report naming, Markdown escaping
//! - `console` - status lines and the scan summary
//! - `table` - aligned console table
//! - `json` - JSON report file
//! - `markdown` - Markdown report file

mod config;
mod console;
mod json;
mod markdown;
mod table;
mod utils;

pub use config::OutputConfig;
pub use console::{Console, format_elapsed};
pub use json::{render_json, write_json};
pub use markdown::{render_markdown, write_markdown};
pub use table::TableFormatter;
pub use utils::{escape_cell, format_size, report_filename};
