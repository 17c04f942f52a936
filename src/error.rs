//! Error types for rr.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from a batch rename run.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Command line could not be parsed.
    #[error("{0}")]
    InvalidArguments(String),

    /// Match pattern failed to compile.
    #[error("Regular expression compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// Root directory is missing or not a directory.
    #[error("Invalid root directory '{}': {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// Directory walk failed.
    #[error("Error scanning directory '{}': {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Renaming a single entry failed; the rest of the batch was abandoned.
    #[error("Error renaming '{}' -> '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User declined confirmation.
    ///
    /// Not a failure—used for control flow when user cancels.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Console I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RenameError {
    /// Process exit code for this error.
    ///
    /// Cancellation is a normal early exit and maps to success.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenameError::Cancelled => 0,
            _ => 1,
        }
    }
}

/// Result type alias for rr operations.
pub type Result<T> = std::result::Result<T, RenameError>;
