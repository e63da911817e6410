//! Formula parsing.
//!
//! The accepted grammar is deliberately small:
//!
//! ```text
//! formula := '=' NAME '(' ADDRESS ':' ADDRESS ')'
//! ```
//!
//! Whitespace is allowed around every token and `NAME` is matched without
//! regard to case. Anything else is rejected with a [`FormulaError`].

use regex::Regex;
use std::sync::OnceLock;

use super::cell_ref::CellRef;
use crate::builtins::Aggregate;
use crate::error::{FormulaError, Result};

/// A parsed range formula such as `=SUM(A1:B5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Formula {
    pub aggregate: Aggregate,
    pub start: CellRef,
    pub end: CellRef,
}

/// Matches the argument list after the function name, e.g. `(A1:B5)`.
///
/// Captures:
/// - `start`: start cell ref (e.g. `A1`)
/// - `end`: end cell ref (e.g. `B5`)
fn range_args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\(\s*(?<start>[A-Za-z]+[0-9]+)\s*:\s*(?<end>[A-Za-z]+[0-9]+)\s*\)$",
        )
        .expect("formula range regex must compile")
    })
}

impl Formula {
    /// Parse formula text.
    ///
    /// Text without a leading `=` and unknown function names both fail with
    /// [`FormulaError::Unsupported`]. A known function with a malformed
    /// argument list fails with [`FormulaError::Syntax`].
    pub fn parse(text: &str) -> Result<Formula> {
        let trimmed = text.trim();
        let Some(body) = trimmed.strip_prefix('=') else {
            return Err(FormulaError::Unsupported(trimmed.to_string()));
        };

        let body = body.trim_start();
        let name_end = body
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(body.len());
        let (name, args) = (&body[..name_end], body[name_end..].trim());

        let aggregate = Aggregate::from_sheet_name(name)
            .ok_or_else(|| FormulaError::Unsupported(name.to_string()))?;

        let caps = range_args_re().captures(args).ok_or_else(|| {
            FormulaError::Syntax(format!(
                "expected {}(<cell>:<cell>), got '{}'",
                name.to_ascii_uppercase(),
                trimmed
            ))
        })?;

        let start: CellRef = caps["start"].parse()?;
        let end: CellRef = caps["end"].parse()?;

        Ok(Formula {
            aggregate,
            start,
            end,
        })
    }
}
