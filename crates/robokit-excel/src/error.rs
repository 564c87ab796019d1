//! Error types for robokit-excel

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in robokit-excel
#[derive(Debug, Error)]
pub enum Error {
    /// A document with this identifier is already registered
    #[error("Document with id '{0}' is already open")]
    DuplicateDocumentId(String),

    /// No document registered under this identifier
    #[error("Document with id '{0}' is not open")]
    UnknownDocumentId(String),

    /// An operation required a current document but the cache is empty
    #[error("No open documents")]
    NoOpenDocuments,

    /// Sheet not found by name in the current document
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Filesystem error (creating parent directories, reading a stream)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the XLSX backend
    #[error("XLSX error: {0}")]
    Xlsx(String),
}

impl From<umya_spreadsheet::XlsxError> for Error {
    fn from(err: umya_spreadsheet::XlsxError) -> Self {
        Error::Xlsx(err.to_string())
    }
}
