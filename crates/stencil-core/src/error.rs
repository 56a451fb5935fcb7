//! Error types for scaffold operations.
//!
//! All errors use `thiserror` for ergonomic error handling with context.
//! Two terminations are deliberately *not* errors: an empty candidate set and
//! user cancellation are normal outcomes, modeled by
//! [`crate::scaffold::ScaffoldOutcome`]. Lower layers surface these errors to
//! their immediate caller without swallowing; only the binary converts them
//! into user-visible messages.

use std::path::PathBuf;
use thiserror::Error;

/// Error variants for scaffold operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // File system errors
    /// Path not found in the file system.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// Error reading a file.
    #[error("file read error: {0}")]
    FileReadError(String),

    /// Error writing a file.
    #[error("file write error: {0}")]
    FileWriteError(String),

    /// Permission denied for the specified operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    // Manifest / template parse errors
    /// Manifest content is not valid JSON or does not match the manifest shape.
    #[error("invalid templates manifest: {path}")]
    ManifestParse {
        /// Path to the manifest that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A registered template string is not valid template JSON.
    #[error("invalid template JSON: {0}")]
    TemplateParse(#[from] serde_json::Error),

    // Edit building errors
    /// A template source file could not be read; fatal for the whole batch.
    #[error("template source unreadable: {path}")]
    SourceRead {
        /// Path to the source file that failed to read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<ScaffoldError>,
    },

    /// The edit application boundary reported failure for the transaction.
    #[error("failed to apply template changes: {0}")]
    ApplyFailed(String),

    // IO and system errors
    /// Standard IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // Anyhow passthrough for rich context
    /// Generic error with context from anyhow.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    // Generic fallback
    /// Unexpected error occurred.
    #[error("unexpected error: {0}")]
    Other(String),
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
