//! csvsheet-core - UI-agnostic session model, CSV parsing and table rendering.

pub mod error;
pub mod session;
pub mod storage;

pub use error::{CsvSheetError, Result};
pub use session::{Session, SessionOptions};
pub use storage::{Grid, Rendered};

pub use csvsheet_engine::engine::{CellRef, CellStore, Evaluation};
