//! Error types for Campaign Notes

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for page construction and entry loading
#[derive(Error, Debug)]
pub enum Error {
    /// The requested container is not registered on the document
    #[error("Container unavailable: {0}")]
    ContainerUnavailable(String),

    /// An entry record lacks a usable `markdown` field
    #[error("Malformed entry at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    /// The entry source is not shaped like a sequence of entries
    #[error("Invalid entry source: {0}")]
    InvalidSource(String),

    /// Page configuration failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error while walking an entry directory
    #[error("Directory walk error at {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        Error::Walk {
            path,
            message: err.to_string(),
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
