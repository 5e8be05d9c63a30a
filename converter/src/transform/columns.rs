//! Source column names of the wine review export.
//!
//! The header of the export must carry all of [`REQUIRED_COLUMNS`]; other
//! columns are ignored.

pub const RECORD_ID: &str = "Record ID";
pub const WINERY: &str = "Winery Display";
pub const WINE_NAME: &str = "Wine Name";
pub const VINTAGE: &str = "Vintage";
pub const NOTE: &str = "Note (Full Output Display)";
pub const TASTER: &str = "Taster";
pub const COLOR: &str = "Color";
pub const COUNTRY: &str = "Country";
pub const REGION: &str = "Region Display";
pub const SCORE: &str = "Score";
pub const PRICE: &str = "Price Only";
pub const BOTTLE_SIZE: &str = "Bottle Size";
pub const ISSUE_DATE: &str = "Issue Date (External)";
pub const TOP100_YEAR: &str = "T100 Year";
pub const TOP100_RANK: &str = "T100 Rank";
pub const LABEL_URL: &str = "Label URL";
pub const WINE_TYPE: &str = "Wine Type";

/// Every column read by [`super::mapper::to_record`], in output field order.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    RECORD_ID,
    WINERY,
    WINE_NAME,
    VINTAGE,
    NOTE,
    TASTER,
    COLOR,
    COUNTRY,
    REGION,
    SCORE,
    PRICE,
    BOTTLE_SIZE,
    ISSUE_DATE,
    TOP100_YEAR,
    TOP100_RANK,
    LABEL_URL,
    WINE_TYPE,
];
