//! Error types for the wine list conversion pipeline.
//!
//! One error type per stage:
//!
//! - [`CsvError`] - reading and parsing the CSV export
//! - [`TransformError`] - coercing a row into a [`crate::models::WineRecord`]
//! - [`PipelineError`] - top-level orchestration, including the output file
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading the CSV export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open or read the input file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV: broken quoting or invalid UTF-8.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// The input has no header row at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// The header row lacks columns the field dictionary needs.
    #[error("Missing columns in header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while coercing a row into an output record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A strictly-numeric column holds a non-empty, non-integer value.
    #[error("Line {line}, column '{column}' (value '{value}'): expected an integer")]
    InvalidInteger {
        line: u64,
        column: String,
        value: String,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::transform`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Field coercion error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Failed to create or replace the output file.
    #[error("IO error: cannot write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for field coercion.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().starts_with("CSV error"));
        assert!(pipeline_err.to_string().contains("empty"));

        // TransformError -> PipelineError
        let transform_err = TransformError::InvalidInteger {
            line: 4,
            column: "Score".into(),
            value: "ninety".into(),
        };
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().starts_with("Transform error"));
        assert!(pipeline_err.to_string().contains("ninety"));
    }

    #[test]
    fn test_invalid_integer_format() {
        let err = TransformError::InvalidInteger {
            line: 5,
            column: "Price Only".into(),
            value: "$40".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 5"));
        assert!(msg.contains("column 'Price Only'"));
        assert!(msg.contains("value '$40'"));
    }

    #[test]
    fn test_missing_columns_lists_all() {
        let err = CsvError::MissingColumns(vec!["Score".into(), "Vintage".into()]);
        assert_eq!(err.to_string(), "Missing columns in header: Score, Vintage");
    }
}
