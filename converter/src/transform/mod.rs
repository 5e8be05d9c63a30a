//! Transformation module.
//!
//! This module handles CSV row to wine list record conversion:
//! - Columns: source column names of the export
//! - Coerce: per-cell typing rules
//! - Mapper: one row to one record
//! - Pipeline: file to file conversion

pub mod coerce;
pub mod columns;
pub mod mapper;
pub mod pipeline;

pub use mapper::{to_record, to_records};
pub use pipeline::*;
