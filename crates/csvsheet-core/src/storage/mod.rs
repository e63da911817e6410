//! CSV parsing and console rendering.

mod csv;
mod grid;
mod table;

pub use csv::{DEFAULT_DELIMITER, DEFAULT_RECORD_SEPARATOR, detect_delimiter, parse_csv};
pub use grid::Grid;
pub use table::{DEFAULT_MAX_TABLE_WIDTH, Rendered, WIDTH_WARNING, render_table, row_width};
