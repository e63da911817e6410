//! Error types for formula parsing and evaluation.

use thiserror::Error;

/// Hard failures while turning formula text into a result.
///
/// Data-quality problems inside a range are not errors; they evaluate to
/// [`crate::engine::Evaluation::NotApplicable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Unsupported Formula! '{0}'")]
    Unsupported(String),

    #[error("Formula syntax error: {0}")]
    Syntax(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),
}

pub type Result<T> = std::result::Result<T, FormulaError>;
