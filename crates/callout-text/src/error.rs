//! Error types for text layout operations.

use std::fmt;

/// Error type for wrapping and table layout operations.
///
/// Layout inputs are caller-supplied and validated synchronously; there is
/// nothing to retry. A mismatched cell count in [`table`](crate::table) is
/// *not* an error - missing cells are padded as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A wrap width of zero was supplied.
    InvalidWrapWidth,

    /// A table column spec contained a zero width; carries the column index.
    InvalidColumnWidth(usize),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidWrapWidth => write!(f, "wrap width must be at least 1"),
            LayoutError::InvalidColumnWidth(index) => {
                write!(f, "column {} width must be at least 1", index)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
