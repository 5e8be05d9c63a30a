//! Conversion configuration.
//!
//! Values that change once a year live here and are passed into
//! [`crate::transform::pipeline::transform`] through [`ConvertOptions`].
//! The web list reads the same numbers from its own config.

/// Year of the most recent Top 100 list.
///
/// Bump each year when the new list is published.
pub const CURRENT_TOP100_YEAR: i64 = 2025;

/// Year of the first Top 100 list.
pub const EARLIEST_TOP100_YEAR: i64 = 1988;

/// Options for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Most recent Top 100 year; records of this year count as current.
    pub top100_year: i64,

    /// Oldest Top 100 year. Records outside
    /// `earliest_top100_year..=top100_year` are reported as warnings.
    pub earliest_top100_year: i64,
}

impl ConvertOptions {
    /// Options for a given current Top 100 year.
    pub fn for_year(top100_year: i64) -> Self {
        Self {
            top100_year,
            ..Self::default()
        }
    }

    /// Whether `year` falls inside the configured Top 100 window.
    pub fn in_window(&self, year: i64) -> bool {
        (self.earliest_top100_year..=self.top100_year).contains(&year)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            top100_year: CURRENT_TOP100_YEAR,
            earliest_top100_year: EARLIEST_TOP100_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.top100_year, 2025);
        assert_eq!(options.earliest_top100_year, 1988);
    }

    #[test]
    fn test_window() {
        let options = ConvertOptions::for_year(2024);
        assert!(options.in_window(1988));
        assert!(options.in_window(2024));
        assert!(!options.in_window(2025));
        assert!(!options.in_window(1987));
    }
}
