use super::Session;
use crate::error::Result;
use csvsheet_engine::engine::{Evaluation, evaluate};

impl Session {
    /// Evaluate formula text such as `=SUM(A1:A3)` against the cell store.
    pub fn evaluate(&self, formula: &str) -> Result<Evaluation> {
        Ok(evaluate(&self.store, formula)?)
    }
}
