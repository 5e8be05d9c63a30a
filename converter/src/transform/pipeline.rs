//! High-level conversion pipeline: CSV file in, JSON wine list out.
//!
//! The whole input is read and converted before the output is touched, so a
//! bad row never leaves a partial JSON file behind. The JSON is written to a
//! temporary file next to the destination and renamed into place.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use winelist::{transform, ConvertOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = transform(
//!         Path::new("top100.csv"),
//!         Path::new("wines.json"),
//!         &ConvertOptions::default(),
//!     )?;
//!     println!("Converted {} records", summary.records);
//!     Ok(())
//! }
//! ```

use std::fs::{self, Permissions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tempfile::Builder;

use super::columns::REQUIRED_COLUMNS;
use super::mapper::to_records;
use crate::config::ConvertOptions;
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::WineRecord;
use crate::parser::{parse_csv, parse_csv_file, require_columns, ParseResult};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of records written.
    pub records: usize,

    /// Records on the current year's Top 100 list.
    pub current_top100: usize,

    /// Records whose Top 100 year falls outside the configured window.
    pub out_of_window: usize,
}

/// Convert the CSV export at `input` into the JSON wine list at `output`.
///
/// Steps:
/// 1. Parse the CSV and check the header
/// 2. Map every row to a [`WineRecord`]
/// 3. Check Top 100 years against `options`
/// 4. Write the JSON array atomically
pub fn transform(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> PipelineResult<ConversionSummary> {
    log_info(format!("Reading {}", input.display()));
    let parsed = parse_csv_file(input)?;

    let records = convert_parsed(parsed)?;
    let summary = summarize(&records, options);

    write_json(&records, output)?;
    log_success(format!("Wrote {} records to {}", records.len(), output.display()));

    Ok(summary)
}

/// Convert CSV from any reader into records, without touching the filesystem.
pub fn convert_reader<R: Read>(reader: R) -> PipelineResult<Vec<WineRecord>> {
    convert_parsed(parse_csv(reader)?)
}

/// Convert a CSV string into records.
pub fn convert_str(content: &str) -> PipelineResult<Vec<WineRecord>> {
    convert_reader(content.as_bytes())
}

fn convert_parsed(parsed: ParseResult) -> PipelineResult<Vec<WineRecord>> {
    require_columns(&parsed.headers, &REQUIRED_COLUMNS)?;
    log_success(format!("Read {} rows", parsed.rows.len()));

    let records = to_records(&parsed.rows)?;
    log_success(format!("Converted {} records", records.len()));
    Ok(records)
}

/// Count Top 100 entries and warn about years outside the window.
pub fn summarize(records: &[WineRecord], options: &ConvertOptions) -> ConversionSummary {
    let mut summary = ConversionSummary {
        records: records.len(),
        ..ConversionSummary::default()
    };

    for record in records {
        let Some(year) = record.top100_year else {
            continue;
        };
        if year == options.top100_year {
            summary.current_top100 += 1;
        }
        if !options.in_window(year) {
            summary.out_of_window += 1;
            log_warning(format!(
                "Record {} has Top 100 year {} outside {}..={}",
                record
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "(no id)".to_string()),
                year,
                options.earliest_top100_year,
                options.top100_year
            ));
        }
    }

    if summary.current_top100 == 0 && !records.is_empty() {
        log_warning(format!("No records on the {} Top 100 list", options.top100_year));
    }

    summary
}

/// Serialize records as a 2-space indented JSON array.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn records_to_json(records: &[WineRecord]) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path` through a temporary sibling file.
///
/// A replaced file keeps its permissions. A new file gets `0o644` minus the
/// process umask on unix.
pub fn write_json(records: &[WineRecord], path: &Path) -> PipelineResult<()> {
    let output_err = |source: std::io::Error| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    if existing.is_none() {
        if let Some(perms) = new_file_permissions() {
            builder.permissions(perms);
        }
    }
    let tmp = builder.tempfile_in(dir).map_err(output_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(output_err)?;
    }

    write_records(tmp.as_file(), records, path)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;
    Ok(())
}

/// Pretty-print records into `writer`. I/O failures are reported against
/// `path`, not as JSON errors.
fn write_records<W: Write>(writer: W, records: &[WineRecord], path: &Path) -> PipelineResult<()> {
    let output_err = |source: std::io::Error| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            output_err(e.into())
        } else {
            PipelineError::Json(e)
        }
    })?;
    writer.flush().map_err(output_err)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
