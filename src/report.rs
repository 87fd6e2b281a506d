//! Renders a [`ReconciliationResult`] for display.
//!
//! Two layouts are supported: a sectioned text report and a flat CSV with one
//! row per classified item. Both keep the result's emission order.

use crate::error::{ReconError, Result};
use crate::result::ReconciliationResult;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Output layout for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = ReconError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(ReconError::InvalidArgument(format!(
                "unknown report format '{}', expected text or csv",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    category: &'a str,
    left_id: &'a str,
    right_id: &'a str,
}

/// Writes `result` to `writer` in the requested layout.
pub fn write_report<W: Write>(
    result: &ReconciliationResult,
    format: ReportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(result, writer),
        ReportFormat::Csv => write_csv(result, writer),
    }
}

fn write_text<W: Write>(result: &ReconciliationResult, mut writer: W) -> Result<()> {
    writeln!(writer, "# Exact Matches")?;
    for pair in result.exact_matches() {
        writeln!(writer, "{},{}", pair.left.id(), pair.right.id())?;
    }

    writeln!(writer, "# Weak Matches")?;
    for pair in result.weak_matches() {
        writeln!(writer, "{},{}", pair.left.id(), pair.right.id())?;
    }

    writeln!(writer, "# Left Breaks")?;
    for tx in result.left_breaks() {
        writeln!(writer, "{}", tx.id())?;
    }

    writeln!(writer, "# Right Breaks")?;
    for tx in result.right_breaks() {
        writeln!(writer, "{}", tx.id())?;
    }

    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(result: &ReconciliationResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["category", "left_id", "right_id"])?;

    for (category, pairs) in [
        ("exact", result.exact_matches()),
        ("weak", result.weak_matches()),
    ] {
        for pair in pairs {
            csv_writer.serialize(ReportRow {
                category,
                left_id: pair.left.id(),
                right_id: pair.right.id(),
            })?;
        }
    }

    for tx in result.left_breaks() {
        csv_writer.serialize(ReportRow {
            category: "left_break",
            left_id: tx.id(),
            right_id: "",
        })?;
    }

    for tx in result.right_breaks() {
        csv_writer.serialize(ReportRow {
            category: "right_break",
            left_id: "",
            right_id: tx.id(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
