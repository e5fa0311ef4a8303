//! Error types for the riskkit CLI.
//!
//! Commands return `anyhow::Result`; the variants here are the ones `main`
//! inspects to choose an exit code or that carry structured context.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a record that parsed but failed the scoring contract.
pub const VALIDATION_EXIT_CODE: i32 = 2;

#[derive(Debug, Error)]
pub enum RiskkitError {
    /// Input file not found at the specified path.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error reading or writing files.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O operation that failed.
        message: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record was rejected by the scoring contract.
    ///
    /// The offending fields have already been printed.
    #[error("record failed validation with {count} error(s)")]
    ValidationFailed {
        /// Number of offending fields.
        count: usize,
    },
}

impl RiskkitError {
    /// Creates a new `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Creates a new `IoError` from an I/O error with context.
    #[must_use]
    pub fn io_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Creates a new `ValidationFailed` error.
    #[must_use]
    pub const fn validation_failed(count: usize) -> Self {
        Self::ValidationFailed { count }
    }
}
