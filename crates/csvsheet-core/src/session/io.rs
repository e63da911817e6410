use super::Session;
use crate::error::{CsvSheetError, Result};
use crate::storage::{Grid, Rendered, detect_delimiter, parse_csv, render_table};
use std::io::Write;
use std::path::Path;

fn has_csv_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".csv")
}

impl Session {
    /// Read, parse and ingest a `.csv` file.
    ///
    /// The extension is checked before touching the filesystem. Bytes that
    /// are not valid UTF-8 are replaced with U+FFFD rather than rejected.
    pub fn load_file(&mut self, path: &Path) -> Result<&Grid> {
        if !has_csv_extension(path) {
            return Err(CsvSheetError::InvalidExtension(path.display().to_string()));
        }

        let bytes = std::fs::read(path).map_err(|source| CsvSheetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let grid = self.load_str(&content);
        tracing::info!(
            path = %path.display(),
            rows = grid.height(),
            columns = grid.width(),
            "loaded csv"
        );
        Ok(grid)
    }

    /// Parse CSV text and write every cell into the store.
    pub fn load_str(&mut self, text: &str) -> &Grid {
        let record_separator = self.options.record_separator;
        let delimiter = self
            .options
            .delimiter
            .unwrap_or_else(|| detect_delimiter(text, record_separator));
        tracing::debug!(?delimiter, "parsing csv");

        let grid = parse_csv(text, delimiter, record_separator);
        self.store.ingest(grid.rows());
        self.grid.insert(grid)
    }

    /// Render the most recently loaded grid.
    pub fn render<W: Write>(&self, w: &mut W) -> Result<Rendered> {
        let Some(grid) = &self.grid else {
            return Ok(Rendered::Empty);
        };
        Ok(render_table(w, grid, self.options.max_table_width)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionOptions;
    use csvsheet_engine::engine::{CellRef, CellValue};

    struct Cleanup(std::path::PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn temp_csv_path(tag: &str, ext: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "csvsheet_{}_{}_{}_{:?}.{}",
            tag,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            std::thread::current().id(),
            ext
        ))
    }

    fn cell(name: &str) -> CellRef {
        CellRef::from_str(name).unwrap()
    }

    #[test]
    fn test_load_file_ingests_cells() {
        let path = temp_csv_path("load", "CSV");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "item,qty\r\napple,3\r\npear,x\r\n").unwrap();

        let mut session = Session::new();
        let grid = session.load_file(&path).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 2);

        assert_eq!(session.store.get(&cell("B2")), CellValue::Number(3.0));
        assert_eq!(session.store.get(&cell("B3")), CellValue::Number(0.0));
        assert_eq!(session.store.get(&cell("A1")), CellValue::Number(0.0));
    }

    #[test]
    fn test_load_file_replaces_invalid_utf8() {
        let path = temp_csv_path("latin1", "csv");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, b"caf\xe9,2\n").unwrap();

        let mut session = Session::new();
        let grid = session.load_file(&path).unwrap();
        assert_eq!(grid.get(0, 0), Some("caf\u{FFFD}"));
        assert_eq!(session.store.get(&cell("B1")), CellValue::Number(2.0));
    }

    #[test]
    fn test_load_file_rejects_other_extensions() {
        let mut session = Session::new();
        let err = session.load_file(Path::new("data.txt")).unwrap_err();
        assert!(matches!(err, CsvSheetError::InvalidExtension(_)));
        assert!(session.grid.is_none());
    }

    #[test]
    fn test_load_file_missing_reports_path() {
        let path = temp_csv_path("missing", "csv");
        let mut session = Session::new();
        let err = session.load_file(&path).unwrap_err();
        assert!(matches!(err, CsvSheetError::Read { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_str_detects_semicolons() {
        let mut session = Session::new();
        let grid = session.load_str("a;b\n1;2\n");
        assert_eq!(grid.width(), 2);
        assert_eq!(session.store.get(&cell("B2")), CellValue::Number(2.0));
    }

    #[test]
    fn test_configured_delimiter_skips_detection() {
        let mut session = Session::with_options(SessionOptions {
            delimiter: Some(','),
            ..SessionOptions::default()
        });
        let grid = session.load_str("a;b\n1;2\n");
        assert_eq!(grid.width(), 1);
        assert_eq!(session.store.get(&cell("A2")), CellValue::Number(1.0));
    }

    #[test]
    fn test_second_load_overlays_store() {
        let mut session = Session::new();
        session.load_str("1,2\n3,4\n");
        session.load_str("9\n");
        assert_eq!(session.store.get(&cell("A1")), CellValue::Number(9.0));
        assert_eq!(session.store.get(&cell("B2")), CellValue::Number(4.0));
        assert_eq!(session.grid.as_ref().map(Grid::height), Some(1));
    }

    #[test]
    fn test_render_uses_configured_width() {
        let mut session = Session::with_options(SessionOptions {
            max_table_width: 10,
            ..SessionOptions::default()
        });
        session.load_str("abcdef,ghi\n");
        let mut out = Vec::new();
        assert_eq!(session.render(&mut out).unwrap(), Rendered::TooWide);
    }

    #[test]
    fn test_render_before_load_is_empty() {
        let session = Session::new();
        let mut out = Vec::new();
        assert_eq!(session.render(&mut out).unwrap(), Rendered::Empty);
        assert!(out.is_empty());
    }
}
