//! CSV reader for wine review exports.
//!
//! Comma-separated, quote-aware, UTF-8. Each data row becomes an
//! [`InputRow`] keyed by the header names. No wine-specific logic here
//! beyond checking that the header carries the columns the caller needs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CsvError, CsvResult};
use crate::models::InputRow;

const BOM: char = '\u{feff}';

/// Parsed CSV with its header.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Column headers in file order.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<InputRow>,
}

/// Parse CSV from a reader.
///
/// Blank lines are skipped. Rows shorter than the header leave the trailing
/// columns absent; cells past the last header are ignored.
pub fn parse_csv<R: Read>(reader: R) -> CsvResult<ParseResult> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = read_headers(rdr.headers()?);
    if headers.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(to_row(&headers, &record, line));
    }

    Ok(ParseResult { headers, rows })
}

/// Parse a CSV string. Convenience wrapper around [`parse_csv`].
///
/// # Example
/// ```
/// let parsed = winelist::parser::parse_str("Score,Color\n95,Red\n").unwrap();
/// assert_eq!(parsed.rows.len(), 1);
/// assert_eq!(parsed.rows[0].get("Score"), Some("95"));
/// ```
pub fn parse_str(content: &str) -> CsvResult<ParseResult> {
    parse_csv(content.as_bytes())
}

/// Open and parse a CSV file.
pub fn parse_csv_file(path: &Path) -> CsvResult<ParseResult> {
    let file = File::open(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file)
}

/// Fail with [`CsvError::MissingColumns`] unless every `required` column is
/// in `headers`.
pub fn require_columns(headers: &[String], required: &[&str]) -> CsvResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CsvError::MissingColumns(missing))
    }
}

fn read_headers(record: &StringRecord) -> Vec<String> {
    // A lone empty field means the file had no header line at all.
    if record.len() == 1 && record[0].is_empty() {
        return Vec::new();
    }
    record
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect()
}

fn to_row(headers: &[String], record: &StringRecord, line: u64) -> InputRow {
    let mut row = InputRow::new(line);
    for (header, value) in headers.iter().zip(record.iter()) {
        row.insert(header.as_str(), value);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let parsed = parse_str("name,age\nAlice,30\nBob,25").unwrap();

        assert_eq!(parsed.headers, vec!["name", "age"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].get("name"), Some("Alice"));
        assert_eq!(parsed.rows[0].get("age"), Some("30"));
        assert_eq!(parsed.rows[1].get("name"), Some("Bob"));
    }

    #[test]
    fn test_quoted_values() {
        let csv = "name,note\n\"Ch\u{e2}teau, Margaux\",\"Said \"\"superb\"\"\nlong finish\"";
        let parsed = parse_str(csv).unwrap();

        assert_eq!(parsed.rows[0].get("name"), Some("Ch\u{e2}teau, Margaux"));
        assert_eq!(parsed.rows[0].get("note"), Some("Said \"superb\"\nlong finish"));
    }

    #[test]
    fn test_values_not_trimmed() {
        let parsed = parse_str("a,b\n  1 , x\n").unwrap();
        assert_eq!(parsed.rows[0].get("a"), Some("  1 "));
        assert_eq!(parsed.rows[0].get("b"), Some(" x"));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let parsed = parse_str("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(parsed.rows.len(), 2);
    }

    #[test]
    fn test_line_numbers() {
        let parsed = parse_str("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(parsed.rows[0].line, 2);
        assert_eq!(parsed.rows[1].line, 3);
    }

    #[test]
    fn test_short_row_leaves_columns_absent() {
        let parsed = parse_str("a,b,c\n1,\n").unwrap();

        assert_eq!(parsed.rows[0].get("a"), Some("1"));
        assert_eq!(parsed.rows[0].get("b"), Some(""));
        assert_eq!(parsed.rows[0].get("c"), None);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let parsed = parse_str("a,b\n1,2,3,4").unwrap();

        assert_eq!(parsed.rows[0].len(), 2);
        assert_eq!(parsed.rows[0].get("b"), Some("2"));
    }

    #[test]
    fn test_bom_stripped_from_header() {
        let parsed = parse_str("\u{feff}Record ID,Score\n7,90\n").unwrap();
        assert_eq!(parsed.headers[0], "Record ID");
        assert_eq!(parsed.rows[0].get("Record ID"), Some("7"));
    }

    #[test]
    fn test_header_only() {
        let parsed = parse_str("a,b\n").unwrap();
        assert_eq!(parsed.headers.len(), 2);
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_empty_csv_error() {
        let err = parse_str("").unwrap_err();
        assert!(matches!(err, CsvError::EmptyFile));
    }

    #[test]
    fn test_invalid_utf8_error() {
        let bytes: &[u8] = &[b'a', b'\n', 0xff, 0xfe, b'\n'];
        let err = parse_csv(bytes).unwrap_err();
        assert!(matches!(err, CsvError::Parse(_)));
    }

    #[test]
    fn test_require_columns() {
        let headers = vec!["Score".to_string(), "Color".to_string()];
        assert!(require_columns(&headers, &["Score"]).is_ok());

        let err = require_columns(&headers, &["Score", "Vintage", "Taster"]).unwrap_err();
        match err {
            CsvError::MissingColumns(cols) => assert_eq!(cols, vec!["Vintage", "Taster"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Score\n88\n").unwrap();

        let parsed = parse_csv_file(file.path()).unwrap();
        assert_eq!(parsed.rows[0].get("Score"), Some("88"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_csv_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CsvError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
