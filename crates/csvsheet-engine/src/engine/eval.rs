//! Formula evaluation against a [`CellStore`].

use std::fmt;

use super::format::format_number;
use super::formula::Formula;
use super::store::CellStore;
use crate::error::Result;

/// The outcome of a successfully parsed formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    Value(f64),
    /// The range held missing or non-numeric data, or nothing at all.
    NotApplicable,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Value(n) => f.write_str(&format_number(*n)),
            Evaluation::NotApplicable => f.write_str("Not Applicable"),
        }
    }
}

/// Evaluate an already parsed formula.
///
/// Ranges are walked lazily. MIN and MAX only look inside the populated
/// extent, and SUM and AVG stop at the first empty cell, so a range reaching
/// far past the data costs no more than the data itself.
pub fn evaluate_formula(store: &CellStore, formula: &Formula) -> Evaluation {
    let (start, end) = (formula.start, formula.end);
    let result = if formula.aggregate.skips_missing() {
        formula.aggregate.apply(store.get_populated_range(start, end))
    } else {
        formula.aggregate.apply(store.get_range(start, end))
    };
    tracing::debug!(
        aggregate = ?formula.aggregate,
        %start,
        %end,
        %result,
        "evaluated formula"
    );
    result
}

/// Parse and evaluate formula text such as `=SUM(A1:A3)`.
pub fn evaluate(store: &CellStore, text: &str) -> Result<Evaluation> {
    let formula = Formula::parse(text)?;
    Ok(evaluate_formula(store, &formula))
}
