//! # Winelist - Top 100 wine review CSV to JSON
//!
//! Converts the tasting-note CSV export into the JSON array the wine list
//! site loads: fixed field names, integers where the data is numeric, and
//! `null` for anything missing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Mapper    │────▶│  JSON list  │
//! │   (UTF-8)   │     │ (InputRow)  │     │(WineRecord) │     │  (atomic)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use winelist::{transform, ConvertOptions};
//!
//! let summary = transform(
//!     Path::new("input.csv"),
//!     Path::new("output.json"),
//!     &ConvertOptions::default(),
//! ).unwrap();
//! println!("Converted {} records", summary.records);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Input rows, wine records, vintages
//! - [`parser`] - CSV reading
//! - [`transform`] - Coercion rules, mapping and the pipeline
//! - [`config`] - Run options
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConvertOptions, CURRENT_TOP100_YEAR, EARLIEST_TOP100_YEAR};

pub use error::{CsvError, PipelineError, TransformError};

pub use models::{InputRow, Vintage, WineRecord, RECORD_FIELDS};

pub use parser::{parse_csv, parse_csv_file, parse_str, ParseResult};

pub use transform::{
    convert_reader, convert_str, records_to_json, summarize, to_record, to_records, transform,
    write_json, ConversionSummary,
};
