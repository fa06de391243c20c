//! Console table output

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::FileRecord;

use super::utils::format_size;

const HEADERS: [&str; 4] = ["DATE", "SIZE", "FILE", "PATH"];
const GUTTER: usize = 3;

/// Aligned four-column table: date, size, name, path.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Print the table to stdout.
    pub fn print(&self, records: &[FileRecord]) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.render(&mut stdout, records)
    }

    /// Write the table to any color-capable writer.
    pub fn render<W: WriteColor>(&self, out: &mut W, records: &[FileRecord]) -> io::Result<()> {
        let rows: Vec<[String; 4]> = records
            .iter()
            .map(|r| {
                [
                    r.last_modified.clone(),
                    format_size(r.size_bytes),
                    r.name.clone(),
                    r.path.display().to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut header = ColorSpec::new();
        header.set_fg(Some(Color::Cyan)).set_bold(true);
        let mut dim = ColorSpec::new();
        dim.set_dimmed(true);
        self.write_row(out, &HEADERS, &widths, &[&header, &header, &header, &header])?;
        self.write_row(out, &["----"; 4], &widths, &[&dim, &dim, &dim, &dim])?;

        let mut date = ColorSpec::new();
        date.set_fg(Some(Color::Yellow));
        let mut size = ColorSpec::new();
        size.set_fg(Some(Color::Green));
        let plain = ColorSpec::new();
        for row in &rows {
            let cells = row.each_ref().map(String::as_str);
            self.write_row(out, &cells, &widths, &[&date, &size, &plain, &dim])?;
        }
        out.flush()
    }

    fn write_row<W: WriteColor>(
        &self,
        out: &mut W,
        cells: &[&str; 4],
        widths: &[usize; 4],
        specs: &[&ColorSpec; 4],
    ) -> io::Result<()> {
        let last = cells.len() - 1;
        for (i, cell) in cells.iter().enumerate() {
            out.set_color(specs[i])?;
            write!(out, "{}", cell)?;
            out.reset()?;
            if i < last {
                let pad = widths[i] - cell.chars().count() + GUTTER;
                write!(out, "{:pad$}", "", pad = pad)?;
            }
        }
        writeln!(out)
    }
}
