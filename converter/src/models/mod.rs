//! Domain models for the wine list conversion.
//!
//! - [`InputRow`] - one CSV data row keyed by header name
//! - [`WineRecord`] - one normalized wine list entry
//! - [`Vintage`] - harvest year, non-vintage marker, or free-text label

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Input Row
// =============================================================================

/// A CSV data row keyed by header name.
///
/// A cell missing from a short row is absent, which is different from a
/// present but empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based line of the row in the source file.
    pub line: u64,
    cells: HashMap<String, String>,
}

impl InputRow {
    pub fn new(line: u64) -> Self {
        Self {
            line,
            cells: HashMap::new(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder variant of [`InputRow::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Cell value, `None` when the row has no cell for this column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// =============================================================================
// Vintage
// =============================================================================

/// Literal marker for a non-vintage wine.
pub const NON_VINTAGE: &str = "NV";

/// Vintage of a wine.
///
/// Serializes as a JSON integer for [`Vintage::Year`] and as a JSON string
/// otherwise. A missing vintage is `Option::None` on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vintage {
    /// Harvest year.
    Year(i64),
    /// Blend of several harvests, written `NV`.
    NonVintage,
    /// Any other non-numeric text, kept as written (e.g. `circa 1995`).
    Label(String),
}

impl Serialize for Vintage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Vintage::Year(y) => serializer.serialize_i64(*y),
            Vintage::NonVintage => serializer.serialize_str(NON_VINTAGE),
            Vintage::Label(s) => serializer.serialize_str(s),
        }
    }
}

struct VintageVisitor;

impl<'de> Visitor<'de> for VintageVisitor {
    type Value = Vintage;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer year or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Vintage, E> {
        Ok(Vintage::Year(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Vintage, E> {
        i64::try_from(v)
            .map(Vintage::Year)
            .map_err(|_| E::custom(format!("vintage year out of range: {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Vintage, E> {
        if v == NON_VINTAGE {
            Ok(Vintage::NonVintage)
        } else {
            Ok(Vintage::Label(v.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for Vintage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VintageVisitor)
    }
}

// =============================================================================
// Wine Record
// =============================================================================

/// One entry of the JSON wine list.
///
/// Field declaration order is the JSON key order. Every field is always
/// serialized; missing values become `null`.
///
/// The plain text fields are `None` only when the source row had no cell for
/// the column at all. An empty cell stays an empty string for those fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: Option<i64>,
    pub winery_full: Option<String>,
    pub wine_full: Option<String>,
    pub vintage: Option<Vintage>,
    pub note: Option<String>,
    pub taster_initials: Option<String>,
    pub color: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub score: Option<i64>,
    pub price: Option<i64>,
    pub alternate_bottle_size: Option<String>,
    pub issue_date: Option<String>,
    pub top100_year: Option<i64>,
    pub top100_rank: Option<i64>,
    pub label_url: Option<String>,
    pub wine_type: Option<String>,
}

/// JSON keys of a [`WineRecord`], in serialization order.
pub const RECORD_FIELDS: [&str; 17] = [
    "id",
    "winery_full",
    "wine_full",
    "vintage",
    "note",
    "taster_initials",
    "color",
    "country",
    "region",
    "score",
    "price",
    "alternate_bottle_size",
    "issue_date",
    "top100_year",
    "top100_rank",
    "label_url",
    "wine_type",
];
