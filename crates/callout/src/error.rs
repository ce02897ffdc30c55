//! Error type for logging operations.

use std::fmt;
use std::io;

use callout_text::LayoutError;

/// Error type for facade operations.
///
/// Sink failures propagate unmodified; layout failures surface the
/// caller-supplied width that caused them. Neither is retried.
#[derive(Debug)]
pub enum LogError {
    /// Invalid wrap width or column spec.
    Layout(LayoutError),

    /// Failure writing to the output sink.
    Io(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Layout(err) => write!(f, "layout error: {}", err),
            LogError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Layout(err) => Some(err),
            LogError::Io(err) => Some(err),
        }
    }
}

impl From<LayoutError> for LogError {
    fn from(err: LayoutError) -> Self {
        LogError::Layout(err)
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_errors_convert() {
        let err: LogError = LayoutError::InvalidWrapWidth.into();
        assert!(matches!(err, LogError::Layout(_)));
        assert!(err.to_string().contains("layout error"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LogError = io_err.into();
        assert!(matches!(err, LogError::Io(_)));
    }
}
