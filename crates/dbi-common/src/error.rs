//! Error types for DBInspector

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for DBInspector operations
pub type Result<T> = std::result::Result<T, DbiError>;

/// Main error type for DBInspector
#[derive(Error, Debug)]
pub enum DbiError {
    /// The caller supplied zero, several, or malformed query arguments
    #[error("Input error: {0}")]
    Input(String),

    /// The identifier resolved to no record in either database
    #[error("Query {0} cannot be found in the cached database download")]
    QueryNotFound(String),

    /// A persisted mapping or raw input file is absent
    #[error("File not found: {}. Try running 'dbi parse' once again.", .0.display())]
    FileMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbiError {
    /// Create an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a query-not-found error
    pub fn query_not_found(query: impl Into<String>) -> Self {
        Self::QueryNotFound(query.into())
    }

    /// Create a file-missing error
    pub fn file_missing(path: impl Into<PathBuf>) -> Self {
        Self::FileMissing(path.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is the normal "nothing matched" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::QueryNotFound(_))
    }
}
