//! Error types for `PelicanSpeak`

use thiserror::Error;

/// The error type for `PelicanSpeak` operations.
///
/// Dialogue decoding and document validation never produce this type: decode
/// is total and validation reports violations through
/// [`ValidationReport`](crate::document::ValidationReport). `Error` covers
/// the interchange and CLI surfaces, where I/O and JSON handling can fail.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document failed structural validation.
    #[error("invalid document: {}", .errors.join("; "))]
    InvalidDocument {
        /// Every violation the validator found.
        errors: Vec<String>,
    },
}

/// A specialized Result type for `PelicanSpeak` operations.
pub type Result<T> = std::result::Result<T, Error>;
