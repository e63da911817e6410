//! Built-in range aggregates.
//!
//! Conventions:
//! - Spreadsheet-facing names are ALL CAPS (e.g. `SUM`, `AVG`); lookup is
//!   case-insensitive.
//! - Several names may map to one [`Aggregate`] (`AVG` and `AVERAGE`).
//! - If you add a new aggregate, add its names to `RANGE_BUILTINS` and a
//!   match arm in [`Aggregate::apply`].

use crate::engine::{CellValue, Evaluation};

/// The aggregate operations a formula can apply to a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Avg,
    Min,
    Max,
}

pub struct RangeBuiltin {
    pub sheet_name: &'static str,
    pub aggregate: Aggregate,
}

pub const RANGE_BUILTINS: &[RangeBuiltin] = &[
    RangeBuiltin {
        sheet_name: "SUM",
        aggregate: Aggregate::Sum,
    },
    RangeBuiltin {
        sheet_name: "AVG",
        aggregate: Aggregate::Avg,
    },
    RangeBuiltin {
        sheet_name: "AVERAGE",
        aggregate: Aggregate::Avg,
    },
    RangeBuiltin {
        sheet_name: "MIN",
        aggregate: Aggregate::Min,
    },
    RangeBuiltin {
        sheet_name: "MAX",
        aggregate: Aggregate::Max,
    },
];

impl Aggregate {
    /// Look up a spreadsheet-facing function name, ignoring case.
    pub fn from_sheet_name(name: &str) -> Option<Aggregate> {
        RANGE_BUILTINS
            .iter()
            .find(|b| b.sheet_name.eq_ignore_ascii_case(name))
            .map(|b| b.aggregate)
    }

    /// Whether missing and NaN cells are simply skipped rather than
    /// turning the result into `NotApplicable`.
    pub fn skips_missing(self) -> bool {
        matches!(self, Aggregate::Min | Aggregate::Max)
    }

    /// Apply the aggregate to the values of a range, in range order.
    ///
    /// SUM and AVG stop at the first missing or NaN value: the result is
    /// `NotApplicable` whatever follows.
    pub fn apply<I>(self, values: I) -> Evaluation
    where
        I: IntoIterator<Item = CellValue>,
    {
        match self {
            Aggregate::Sum | Aggregate::Avg => {
                let mut sum = 0.0;
                let mut count = 0usize;
                for value in values {
                    let Some(n) = value.as_number() else {
                        return Evaluation::NotApplicable;
                    };
                    sum += n;
                    count += 1;
                }
                match (self, count) {
                    (_, 0) => Evaluation::NotApplicable,
                    (Aggregate::Avg, _) => Evaluation::Value(sum / count as f64),
                    _ => Evaluation::Value(sum),
                }
            }
            Aggregate::Min => numeric(values)
                .reduce(f64::min)
                .map_or(Evaluation::NotApplicable, Evaluation::Value),
            Aggregate::Max => numeric(values)
                .reduce(f64::max)
                .map_or(Evaluation::NotApplicable, Evaluation::Value),
        }
    }
}

fn numeric<I>(values: I) -> impl Iterator<Item = f64>
where
    I: IntoIterator<Item = CellValue>,
{
    values.into_iter().filter_map(|v| v.as_number())
}
