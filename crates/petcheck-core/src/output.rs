//! Report output in JSON or JSON Lines.
//!
//! JSON writes a single array of rows; JSONL writes one row per line so a
//! long run can be streamed and tailed.

use serde::Serialize;
use std::io::{self, Write};

use crate::labels::DogNames;
use crate::types::{ReportRow, ResultMap};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Flatten a result map into report rows, in result order.
///
/// Dog flags are only filled in when dog names are available.
pub fn report_rows(results: &ResultMap, dog_names: Option<&DogNames>) -> Vec<ReportRow> {
    results
        .iter()
        .map(|(file_name, record)| ReportRow {
            file_name: file_name.to_string(),
            ground_truth_label: record.ground_truth_label.clone(),
            classifier_label: record.classifier_label.to_string(),
            is_match: record.is_match,
            ground_truth_is_dog: dog_names.map(|d| d.is_dog(&record.ground_truth_label)),
            classifier_is_dog: dog_names.map(|d| d.is_dog_label(&record.classifier_label)),
        })
        .collect()
}

/// A writer that serializes report rows to JSON or JSONL.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    rows_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects the JSON format; JSONL is always one object per line.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            rows_written: 0,
        }
    }

    /// Write all rows: a JSON array, or one line per row for JSONL.
    pub fn write_all<T: Serialize>(&mut self, rows: &[T]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut self.writer, rows)
                        .map_err(io::Error::other)?;
                } else {
                    serde_json::to_writer(&mut self.writer, rows).map_err(io::Error::other)?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::JsonLines => {
                for row in rows {
                    serde_json::to_writer(&mut self.writer, row).map_err(io::Error::other)?;
                    writeln!(self.writer)?;
                }
            }
        }
        self.rows_written += rows.len();
        Ok(())
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
