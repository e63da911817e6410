//! csvsheet_engine - Cell store, cell references and range formulas.

pub(crate) mod builtins;
pub mod engine;
pub mod error;

pub use error::{FormulaError, Result};
