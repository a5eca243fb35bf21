//! Error types for document extraction

use thiserror::Error;

/// Extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File extension is not recognized
    #[error("Unsupported file type: {filename}")]
    Unsupported {
        /// Name of the offending file
        filename: String,
    },

    /// File matched a known extension but could not be parsed
    #[error("Failed to extract '{filename}': {details}")]
    Malformed {
        /// Name of the offending file
        filename: String,
        /// Parser-reported details
        details: String,
    },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ExtractError>;
