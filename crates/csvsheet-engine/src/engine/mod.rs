//! Spreadsheet engine API.

mod cell;
mod cell_ref;
mod eval;
mod format;
mod formula;
mod store;

pub use cell::CellValue;
pub use cell_ref::{CellRef, MAX_COLUMNS};
pub use eval::{Evaluation, evaluate, evaluate_formula};
pub use format::format_number;
pub use formula::Formula;
pub use store::{CellStore, parse_number_or_zero};

pub use crate::builtins::{Aggregate, RANGE_BUILTINS, RangeBuiltin};
