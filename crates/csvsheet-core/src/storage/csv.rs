//! CSV tokenizing.
//!
//! The parser is lenient: it never fails. Unbalanced quotes simply leave the
//! rest of the input inside (or outside) a quoted field.

use super::grid::Grid;

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_RECORD_SEPARATOR: char = '\n';

/// Delimiters considered by [`detect_delimiter`], in priority order.
const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// Parse CSV text into a rectangular [`Grid`].
///
/// - `""` inside a quoted field is a literal quote.
/// - `\r` followed by `record_separator` ends a record like the separator alone.
/// - Record separators and carriage returns inside quotes become a space.
/// - Short rows are padded with empty fields.
pub fn parse_csv(text: &str, delimiter: char, record_separator: char) -> Grid {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            // Check for escaped quote
            if in_quotes && chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }

        let crlf = c == '\r' && c != record_separator && chars.peek() == Some(&record_separator);
        if !in_quotes && c == delimiter {
            row.push(std::mem::take(&mut field));
        } else if !in_quotes && (c == record_separator || crlf) {
            if crlf {
                chars.next();
            }
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
        } else if in_quotes && (c == record_separator || c == '\r') {
            field.push(' ');
        } else {
            field.push(c);
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Guess the field delimiter from the first record.
///
/// Counts `,` `;` tab and `|` outside quotes. A comma wins whenever one is
/// present; otherwise the most frequent candidate wins, ties going to the
/// earlier candidate. Falls back to a comma.
pub fn detect_delimiter(text: &str, record_separator: char) -> char {
    let mut counts = [0usize; DELIMITER_CANDIDATES.len()];
    let mut in_quotes = false;

    for c in text.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes && c == record_separator {
            break;
        } else if !in_quotes
            && let Some(idx) = DELIMITER_CANDIDATES.iter().position(|&d| d == c)
        {
            counts[idx] += 1;
        }
    }

    if counts[0] > 0 {
        return DEFAULT_DELIMITER;
    }

    let mut best = DEFAULT_DELIMITER;
    let mut best_count = 0;
    for (candidate, count) in DELIMITER_CANDIDATES.iter().zip(counts) {
        if count > best_count {
            best = *candidate;
            best_count = count;
        }
    }
    best
}
