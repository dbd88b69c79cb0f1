//! Table rendering
//!
//! Result tables are rendered as a boxed terminal table, TSV or JSON, and
//! either printed or written to a file.

use crate::error::Result;
use crate::OutputFormat;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use dbi_query::{ComparisonTable, SummaryTable};
use serde::Serialize;
use std::path::Path;

/// Sequences longer than this are wrapped in terminal tables
pub const SEQUENCE_WRAP_WIDTH: usize = 30;

/// A result that can be laid out as header plus rows of text
pub trait Tabular: Serialize {
    fn header(&self) -> Vec<String>;

    fn rows(&self) -> Vec<Vec<String>>;

    /// Rows as shown in the terminal
    fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows()
    }
}

impl Tabular for ComparisonTable {
    fn header(&self) -> Vec<String> {
        ComparisonTable::header(self)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        ComparisonTable::rows(self)
    }

    fn display_rows(&self) -> Vec<Vec<String>> {
        let mut rows = ComparisonTable::rows(self);
        for row in rows.iter_mut().filter(|r| r.first().is_some_and(|l| l == "sequence")) {
            for cell in row.iter_mut().skip(1) {
                *cell = wrap(cell, SEQUENCE_WRAP_WIDTH);
            }
        }
        rows
    }
}

impl Tabular for SummaryTable {
    fn header(&self) -> Vec<String> {
        SummaryTable::header(self)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.string_rows()
    }
}

/// Break `text` into lines of at most `width` characters
fn wrap(text: &str, width: usize) -> String {
    text.chars()
        .collect::<Vec<_>>()
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format as a boxed terminal table
pub fn format_as_table<T: Tabular>(results: &T) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(results.header());

    for row in results.display_rows() {
        table.add_row(row);
    }

    format!("{}\n", table)
}

/// Format as tab-separated values
pub fn format_as_tsv<T: Tabular>(results: &T) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    writer.write_record(results.header())?;
    for row in results.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let tsv = String::from_utf8(bytes).map_err(anyhow::Error::from)?;
    Ok(tsv)
}

/// Format as pretty-printed JSON
pub fn format_as_json<T: Tabular>(results: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(results)?))
}

/// Render `results` and print them or write them to `output_file`
///
/// The boxed table format only makes sense in a terminal, so a file
/// requested with the default format receives TSV.
pub fn output_results<T: Tabular>(
    results: &T,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let formatted = match (format, output_file) {
        (OutputFormat::Table, None) => format_as_table(results),
        (OutputFormat::Table, Some(_)) | (OutputFormat::Tsv, _) => format_as_tsv(results)?,
        (OutputFormat::Json, _) => format_as_json(results)?,
    };

    match output_file {
        Some(path) => {
            std::fs::write(path, formatted)?;
            println!(
                "{} Output written to: {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        },
        None => print!("{}", formatted),
    }

    Ok(())
}
