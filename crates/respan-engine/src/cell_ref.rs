//! Cell reference parsing and formatting.
//!
//! Bidirectional conversion between spreadsheet notation (e.g. "A1", "B2",
//! "AA100") and zero-indexed column/row coordinates, plus range parsing for
//! "A1:B4"-style pairs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$")
            .expect("A1 reference regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse spreadsheet notation (e.g. "A1", "aa10"). Returns None for
    /// invalid input, including references too large to index.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        let caps = a1_re().captures(name)?;

        let mut col_acc = 0usize;
        for c in caps["letters"].to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(col, row))
    }

    /// Convert a column index to letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

/// Parse "A1:B4" into (c1, r1, c2, r2), 0-indexed. Returns None unless both
/// endpoints are valid cell references.
pub fn parse_range(range: &str) -> Option<(usize, usize, usize, usize)> {
    let (start, end) = range.split_once(':')?;
    let start = CellRef::from_str(start.trim())?;
    let end = CellRef::from_str(end.trim())?;
    Some((start.col, start.row, end.col, end.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1_round_trip() {
        let cell = CellRef::from_str("B3").unwrap();
        assert_eq!((cell.col, cell.row), (1, 2));
        assert_eq!(cell.to_string(), "B3");

        let cell = CellRef::from_str("AA100").unwrap();
        assert_eq!((cell.col, cell.row), (26, 99));
        assert_eq!(cell.to_string(), "AA100");
    }

    #[test]
    fn test_parse_a1_rejects_invalid() {
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("1A").is_none());
        assert!(CellRef::from_str("").is_none());
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("A1:B4"), Some((0, 0, 1, 3)));
        assert_eq!(parse_range("a1 : b4"), Some((0, 0, 1, 3)));
        assert_eq!(parse_range("A1"), None);
        assert_eq!(parse_range("A1:XYZ"), None);
    }
}
