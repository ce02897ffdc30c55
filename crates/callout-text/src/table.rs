//! Fixed-width column layout for terminal tables.
//!
//! Cells wrap to their column width, rows pack to the tallest cell, and
//! every field pads to exactly its column width. Padding is ANSI-aware:
//! style codes are preserved but never counted.

use console::{pad_str, Alignment};

use crate::error::LayoutError;
use crate::wrap::split_lines;

/// Separator emitted between adjacent columns.
const SEPARATOR: char = '|';

/// Renders row-major cells into fixed-width columns.
///
/// `cells` holds one string per column per row; a cell count that is not a
/// multiple of the column count is padded with empty cells. Each cell wraps
/// to its column's width, each table row emits as many lines as its tallest
/// cell, and every field is left-justified and space-padded to exactly its
/// column width. Columns are joined by a single `|` with no trailing
/// separator; rows are joined by `\n` with no leading or trailing blank row.
///
/// Any zero column width is an input error. An empty `widths` renders to the
/// empty string.
///
/// # Example
///
/// ```rust
/// use callout_text::table;
///
/// let out = table(&[6, 4], &["hello world", "okay"]).unwrap();
/// assert_eq!(out, "hello |okay\nworld |    ");
/// ```
pub fn table<S: AsRef<str>>(widths: &[usize], cells: &[S]) -> Result<String, LayoutError> {
    for (i, &width) in widths.iter().enumerate() {
        if width == 0 {
            return Err(LayoutError::InvalidColumnWidth(i));
        }
    }
    if widths.is_empty() {
        return Ok(String::new());
    }

    let mut out_lines: Vec<String> = Vec::new();
    for row in cells.chunks(widths.len()) {
        let mut wrapped: Vec<Vec<String>> = Vec::with_capacity(widths.len());
        for (j, &width) in widths.iter().enumerate() {
            let text = row.get(j).map(AsRef::as_ref).unwrap_or("");
            wrapped.push(split_lines(width, text)?);
        }

        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        for i in 0..height {
            let fields: Vec<String> = wrapped
                .iter()
                .zip(widths)
                .map(|(cell, &width)| {
                    let text = cell.get(i).map(String::as_str).unwrap_or("");
                    pad_str(text, width, Alignment::Left, None).into_owned()
                })
                .collect();
            out_lines.push(fields.join(&SEPARATOR.to_string()));
        }
    }
    Ok(out_lines.join("\n"))
}
