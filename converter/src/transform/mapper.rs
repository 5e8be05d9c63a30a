//! Row to record mapping.

use super::coerce::{integer, nullable_text, text, vintage};
use super::columns as col;
use crate::error::TransformResult;
use crate::models::{InputRow, WineRecord};

/// Map one CSV row to a wine list record.
///
/// Fails on the first strictly-numeric column that does not hold an integer.
pub fn to_record(row: &InputRow) -> TransformResult<WineRecord> {
    Ok(WineRecord {
        id: integer(row, col::RECORD_ID)?,
        winery_full: text(row, col::WINERY),
        wine_full: text(row, col::WINE_NAME),
        vintage: vintage(row, col::VINTAGE),
        note: text(row, col::NOTE),
        taster_initials: text(row, col::TASTER),
        color: text(row, col::COLOR),
        country: text(row, col::COUNTRY),
        region: text(row, col::REGION),
        score: integer(row, col::SCORE)?,
        price: integer(row, col::PRICE)?,
        alternate_bottle_size: nullable_text(row, col::BOTTLE_SIZE),
        issue_date: text(row, col::ISSUE_DATE),
        top100_year: integer(row, col::TOP100_YEAR)?,
        top100_rank: integer(row, col::TOP100_RANK)?,
        label_url: nullable_text(row, col::LABEL_URL),
        wine_type: nullable_text(row, col::WINE_TYPE),
    })
}

/// Map all rows, preserving order. Stops at the first failing row.
pub fn to_records(rows: &[InputRow]) -> TransformResult<Vec<WineRecord>> {
    rows.iter().map(to_record).collect()
}
