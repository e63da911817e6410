//! Sparse numeric cell storage.
//!
//! The store maps [`CellRef`] addresses to numbers. It is owned by a single
//! session and passed by reference to ingestion, range lookup and formula
//! evaluation. Entries are only ever inserted or overwritten.

use dashmap::DashMap;
use regex::Regex;
use std::sync::OnceLock;

use super::cell::CellValue;
use super::cell_ref::{CellRef, MAX_COLUMNS};

/// Address -> number map with column-major range lookup.
#[derive(Debug, Default)]
pub struct CellStore {
    cells: DashMap<CellRef, f64>,
    /// Largest column and row ever set; every cell past it is `Empty`.
    extent: Option<CellRef>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value at `cell`.
    pub fn set(&mut self, cell: CellRef, value: f64) {
        self.extent = Some(match self.extent {
            Some(max) => CellRef::new(max.col.max(cell.col), max.row.max(cell.row)),
            None => cell,
        });
        self.cells.insert(cell, value);
    }

    /// The bottom-right corner of everything set so far.
    pub fn extent(&self) -> Option<CellRef> {
        self.extent
    }

    /// The value at `cell`, or [`CellValue::Empty`] if it was never set.
    pub fn get(&self, cell: &CellRef) -> CellValue {
        self.cells
            .get(cell)
            .map_or(CellValue::Empty, |entry| CellValue::Number(*entry))
    }

    /// Values in the rectangle `start..=end`, columns outermost.
    ///
    /// The walk is lazy, so callers may stop early on huge ranges. A range
    /// whose start lies after its end on either axis is empty.
    pub fn get_range(
        &self,
        start: CellRef,
        end: CellRef,
    ) -> impl Iterator<Item = CellValue> + '_ {
        (start.col..=end.col).flat_map(move |col| {
            (start.row..=end.row).map(move |row| self.get(&CellRef::new(col, row)))
        })
    }

    /// Like [`get_range`](Self::get_range), with `end` clamped to the
    /// populated extent. Only the trailing `Empty` cells are left out, so
    /// aggregates that ignore missing cells see the same numbers.
    pub fn get_populated_range(
        &self,
        start: CellRef,
        end: CellRef,
    ) -> impl Iterator<Item = CellValue> + '_ {
        self.extent
            .map(|max| CellRef::new(end.col.min(max.col), end.row.min(max.row)))
            .into_iter()
            .flat_map(move |end| self.get_range(start, end))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Write every field of `rows` into the store, coercing text to numbers.
    ///
    /// The field at 0-based `(r, c)` lands at column letter `c`, row `r + 1`.
    /// Fields past column `Z` have no address and are skipped; the number of
    /// skipped fields is returned.
    pub fn ingest<R, S>(&mut self, rows: &[R]) -> usize
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut skipped = 0;
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, field) in row.as_ref().iter().enumerate() {
                if col_idx >= MAX_COLUMNS {
                    skipped += 1;
                    continue;
                }
                let value = parse_number_or_zero(field.as_ref());
                self.set(CellRef::new(col_idx, row_idx), value);
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "fields beyond column Z were not stored");
        }
        skipped
    }
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("leading number regex must compile")
    })
}

/// Parse the leading decimal number of `field`, or 0 if there is none.
///
/// Leading whitespace is ignored and trailing text after the number is
/// dropped, so `" 12.5kg"` is 12.5 and `"n/a"` is 0. `Infinity` and literals
/// too large for an `f64` are infinite; NaN is never produced.
pub fn parse_number_or_zero(field: &str) -> f64 {
    let trimmed = field.trim_start();
    leading_number_re()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
