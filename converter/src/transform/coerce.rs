//! Per-cell coercion rules.
//!
//! | Rule | Empty cell | Absent cell | Otherwise |
//! |------|------------|-------------|-----------|
//! | [`text`] | `""` | null | verbatim |
//! | [`nullable_text`] | null | null | verbatim |
//! | [`integer`] | null | null | base-10 integer, error if not numeric |
//! | [`vintage`] | null | null | `NV`, a year, or the original text |

use crate::error::{TransformError, TransformResult};
use crate::models::{InputRow, Vintage, NON_VINTAGE};

/// Verbatim text. Only an absent cell maps to `None`.
pub fn text(row: &InputRow, column: &str) -> Option<String> {
    row.get(column).map(str::to_string)
}

/// Verbatim text, with empty mapped to `None`.
pub fn nullable_text(row: &InputRow, column: &str) -> Option<String> {
    row.get(column)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strict integer. Empty means missing; anything else must parse.
pub fn integer(row: &InputRow, column: &str) -> TransformResult<Option<i64>> {
    match row.get(column) {
        None | Some("") => Ok(None),
        Some(raw) => parse_int(raw)
            .map(Some)
            .ok_or_else(|| TransformError::InvalidInteger {
                line: row.line,
                column: column.to_string(),
                value: raw.to_string(),
            }),
    }
}

/// Vintage with the three-way fallback. Never fails.
pub fn vintage(row: &InputRow, column: &str) -> Option<Vintage> {
    match row.get(column) {
        None | Some("") => None,
        Some(NON_VINTAGE) => Some(Vintage::NonVintage),
        Some(raw) => Some(match parse_int(raw) {
            Some(year) => Vintage::Year(year),
            None => Vintage::Label(raw.to_string()),
        }),
    }
}

/// Base-10 integer with optional sign, surrounding whitespace allowed.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
