//! Error types for the DBInspector CLI
//!
//! Messages are user-facing and say what to do next where there is
//! something to do.

use dbi_common::DbiError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Failure reported by the ingest or query libraries
    #[error(transparent)]
    Dbi(#[from] DbiError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TSV rendering failed
    #[error("Failed to render TSV: {0}")]
    Tsv(#[from] csv::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// A query that matched nothing exits with 3 so scripts can tell it
    /// apart from real failures and from usage errors (2).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Dbi(err) if err.is_not_found() => 3,
            _ => 1,
        }
    }
}
