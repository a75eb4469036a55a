//! Error types for document generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write, or rename the output file.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP packaging error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization error.
    #[error("XML writing error: {0}")]
    XmlError(String),

    /// The document model violates a structural rule (ragged table, bad heading level).
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Labelled input contained none of the expected sections.
    #[error("No sections found in input (expected one of: {0})")]
    MissingSections(String),
}
