//! Error types for csvsheet core.

use csvsheet_engine::FormulaError;
use thiserror::Error;

/// Errors that can occur while loading files or evaluating formulas.
#[derive(Error, Debug)]
pub enum CsvSheetError {
    #[error("Not a '.csv' file: {0}")]
    InvalidExtension(String),

    #[error("Error reading file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

pub type Result<T> = std::result::Result<T, CsvSheetError>;
