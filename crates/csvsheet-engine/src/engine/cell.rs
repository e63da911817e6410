//! Cell values held by the [`CellStore`](super::CellStore).

/// The value at a cell address.
///
/// `Empty` is what a lookup of a never-set address yields. It is distinct
/// from a stored `Number(0.0)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
}

impl CellValue {
    /// A value counts as numeric when it is present and not NaN.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(n) if !n.is_nan())
    }

    /// The number, if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(CellValue::Empty, CellValue::Number)
    }
}
