//! Console table rendering

use super::grid::Grid;
use std::io::Write;

/// Widest row, in characters, that is still drawn as a table.
pub const DEFAULT_MAX_TABLE_WIDTH: usize = 130;

pub const WIDTH_WARNING: &str = "Warning: CSV file may be too long for proper display!";

/// Outer `|` on each side.
const BORDER_CHARS: usize = 2;
/// One space either side of a cell.
const CELL_PADDING: usize = 2;
/// `" | "` between cells.
const SEPARATOR_CHARS: usize = 3;

/// What [`render_table`] wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rendered {
    Table,
    TooWide,
    Empty,
}

/// Rendered width of a row, counting characters rather than bytes.
pub fn row_width(row: &[String]) -> usize {
    let cells: usize = row.iter().map(|cell| cell.chars().count() + CELL_PADDING).sum();
    BORDER_CHARS + cells + SEPARATOR_CHARS * row.len().saturating_sub(1)
}

/// Write `grid` as a bordered table with the first row as a header.
///
/// If any row would be wider than `max_width` a single warning line is
/// written instead. An empty grid writes nothing.
pub fn render_table<W: Write>(
    w: &mut W,
    grid: &Grid,
    max_width: usize,
) -> std::io::Result<Rendered> {
    if grid.is_empty() {
        return Ok(Rendered::Empty);
    }

    if grid.rows().iter().any(|row| row_width(row) > max_width) {
        writeln!(w, "{}", WIDTH_WARNING)?;
        return Ok(Rendered::TooWide);
    }

    let mut column_widths = vec![0usize; grid.width()];
    for row in grid.rows() {
        for (idx, cell) in row.iter().enumerate() {
            column_widths[idx] = column_widths[idx].max(cell.chars().count());
        }
    }

    let border = format!(
        "+{}+",
        column_widths
            .iter()
            .map(|width| "-".repeat(width + CELL_PADDING))
            .collect::<Vec<_>>()
            .join("+")
    );

    writeln!(w, "{}", border)?;
    for (idx, row) in grid.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&column_widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        writeln!(w, "| {} |", cells.join(" | "))?;

        // Separator after header
        if idx == 0 {
            writeln!(w, "{}", border)?;
        }
    }
    writeln!(w, "{}", border)?;

    Ok(Rendered::Table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_csv;

    fn render(text: &str, max_width: usize) -> (Rendered, String) {
        let grid = parse_csv(text, ',', '\n');
        let mut out = Vec::new();
        let rendered = render_table(&mut out, &grid, max_width).unwrap();
        (rendered, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_renders_header_separator_and_alignment() {
        let (rendered, out) = render("name,qty\napple,3\nfig,10\n", DEFAULT_MAX_TABLE_WIDTH);
        assert_eq!(rendered, Rendered::Table);
        let expected = "\
+-------+-----+
| name  | qty |
+-------+-----+
| apple | 3   |
| fig   | 10  |
+-------+-----+
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_single_row_has_header_separator_and_bottom_border() {
        let (_, out) = render("a,b\n", DEFAULT_MAX_TABLE_WIDTH);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["+---+---+", "| a | b |", "+---+---+", "+---+---+"]);
    }

    #[test]
    fn test_row_width_formula() {
        let row = vec!["ab".to_string(), "c".to_string(), "".to_string()];
        // 2 borders + (2+2) + (1+2) + (0+2) + 2 separators * 3
        assert_eq!(row_width(&row), 17);
        assert_eq!(row_width(&[]), 2);
    }

    #[test]
    fn test_row_width_counts_chars() {
        assert_eq!(row_width(&["héllo".to_string()]), 9);
    }

    #[test]
    fn test_too_wide_prints_warning() {
        let text = format!("{},{}\n", "x".repeat(70), "y".repeat(60));
        let (rendered, out) = render(&text, DEFAULT_MAX_TABLE_WIDTH);
        assert_eq!(rendered, Rendered::TooWide);
        assert_eq!(out.trim_end(), WIDTH_WARNING);
    }

    #[test]
    fn test_exactly_max_width_still_renders() {
        // 2 + (126 + 2) = 130
        let text = format!("{}\n", "z".repeat(126));
        let (rendered, _) = render(&text, DEFAULT_MAX_TABLE_WIDTH);
        assert_eq!(rendered, Rendered::Table);
    }

    #[test]
    fn test_empty_grid_writes_nothing() {
        let (rendered, out) = render("", DEFAULT_MAX_TABLE_WIDTH);
        assert_eq!(rendered, Rendered::Empty);
        assert!(out.is_empty());
    }
}
