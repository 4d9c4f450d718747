//! Document error types

use thiserror::Error;

/// Error raised while opening or reading a PDF document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Bytes do not look like a PDF
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse the object structure
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Page index outside the document
    #[error("Page not found: index {0}")]
    PageNotFound(usize),

    /// MuPDF context error
    #[error("MuPDF context error: {0}")]
    ContextError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Blocking task failed to complete
    #[error("Worker error: {0}")]
    WorkerError(String),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Alias for Result (used by callers outside the module)
pub type DocumentResult<T> = Result<T>;

impl From<mupdf::Error> for DocumentError {
    fn from(err: mupdf::Error) -> Self {
        DocumentError::ContextError(err.to_string())
    }
}

impl From<lopdf::Error> for DocumentError {
    fn from(err: lopdf::Error) -> Self {
        DocumentError::ParseError(err.to_string())
    }
}
