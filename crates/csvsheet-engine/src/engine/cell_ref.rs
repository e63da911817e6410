//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B2", "Z100") and zero-indexed column/row coordinates.
//! Columns are a single letter, so only `A` through `Z` are addressable.
//!
//! # Examples
//!
//! ```
//! use csvsheet_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::FormulaError;

/// Number of addressable columns (`A`..=`Z`).
pub const MAX_COLUMNS: usize = 26;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Za-z])(?<numbers>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "b12").
    /// Returns None if the input is invalid.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = a1_re().captures(name)?;
        let letter = caps["letter"].as_bytes()[0].to_ascii_uppercase();
        let col = (letter - b'A') as usize;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(col, row))
    }

    /// Convert a column index to its letter (0 -> A, 25 -> Z).
    /// Returns None past `Z`.
    pub fn col_to_letter(col: usize) -> Option<char> {
        if col < MAX_COLUMNS {
            Some((b'A' + col as u8) as char)
        } else {
            None
        }
    }
}

impl std::str::FromStr for CellRef {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| FormulaError::InvalidCellRef(s.to_string()))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CellRef::col_to_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            None => write!(f, "#{}:{}", self.col, self.row + 1),
        }
    }
}
