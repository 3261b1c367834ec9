//! Rendering failures

use thiserror::Error;

/// A printer failed to produce its output
///
/// Command errors stored in an execution are content, not rendering
/// failures, and never show up here.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output sink failed
    #[error("{printer} printer: {source}")]
    Write {
        /// Name of the printer that failed
        printer: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Encoding the execution as JSON failed
    #[error("json printer: {0}")]
    Json(#[source] serde_json::Error),
}

impl RenderError {
    /// Wrap an I/O error raised by the named printer.
    #[must_use]
    pub fn write(printer: &'static str, source: std::io::Error) -> Self {
        Self::Write { printer, source }
    }
}
