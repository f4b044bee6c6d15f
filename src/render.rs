use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::sqlite::{ReportTable, Row};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered label line, then one line per row
    #[default]
    Text,
    /// One JSON object per report
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    index: usize,
    report: &'a str,
    columns: &'a [String],
    rows: &'a [Row],
}

/// Render one row as its ordered column values, e.g. `(1, 'Tennis Court 2', 5.0)`.
pub fn format_row(row: &Row) -> String {
    let values: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("({})", values.join(", "))
}

pub fn write_report<W: Write>(
    out: &mut W,
    index: usize,
    label: &str,
    table: &ReportTable,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{index}. {label}")?;
            for row in &table.rows {
                writeln!(out, "{}", format_row(row))?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                index,
                report: label,
                columns: &table.columns,
                rows: &table.rows,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
