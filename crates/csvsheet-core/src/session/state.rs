use crate::storage::{DEFAULT_MAX_TABLE_WIDTH, DEFAULT_RECORD_SEPARATOR, Grid};
use csvsheet_engine::engine::CellStore;

/// How files are parsed and displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Field delimiter; detected per file when `None`.
    pub delimiter: Option<char>,
    pub record_separator: char,
    pub max_table_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            delimiter: None,
            record_separator: DEFAULT_RECORD_SEPARATOR,
            max_table_width: DEFAULT_MAX_TABLE_WIDTH,
        }
    }
}

/// State for one interactive run.
///
/// The cell store outlives individual files: loading a second file writes
/// its cells over the first, and cells it does not cover keep their values.
pub struct Session {
    pub options: SessionOptions,
    /// Numeric view of every cell ingested so far
    pub store: CellStore,
    /// Most recently loaded grid
    pub grid: Option<Grid>,
}

impl Session {
    /// Create a new session.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Session {
            options,
            store: CellStore::new(),
            grid: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
