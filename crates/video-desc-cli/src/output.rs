//! Goal table output: CSV, TSV or JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use video_desc::GoalRow;

use crate::error::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    fn separator(self) -> Option<char> {
        match self {
            TableFormat::Csv => Some(','),
            TableFormat::Tsv => Some('\t'),
            TableFormat::Json => None,
        }
    }
}

impl FromStr for TableFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "tsv" => Ok(TableFormat::Tsv),
            "json" => Ok(TableFormat::Json),
            other => Err(CliError::Config(format!(
                "unknown table format {other:?} (expected csv, tsv or json)"
            ))),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
            TableFormat::Json => "json",
        })
    }
}

/// Write `rows` to `w`. Delimited formats get a header line; JSON is an array of objects.
pub fn write_table<W: Write>(mut w: W, rows: &[GoalRow], format: TableFormat) -> Result<(), CliError> {
    match format.separator() {
        Some(sep) => {
            write_row(&mut w, GoalRow::HEADERS, sep)?;
            for row in rows {
                write_row(&mut w, row.cells(), sep)?;
            }
        }
        None => {
            serde_json::to_writer_pretty(&mut w, rows)?;
            writeln!(w)?;
        }
    }
    w.flush()?;
    Ok(())
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row, quoting cells that need it.
fn write_row<W, I, S>(w: &mut W, row: I, sep: char) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, cell) in row.into_iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}
