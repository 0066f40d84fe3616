//! Error types for protostyle operations.
//!
//! This module defines [`ProtostyleError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Style violations are never errors; they are reported as diagnostics
//! - Failing to read or rewrite a schema source aborts that file's lint run
//! - Use `anyhow::Error` (via `ProtostyleError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for protostyle operations.
#[derive(Debug, Error)]
pub enum ProtostyleError {
    /// Tree document not found at the given location.
    #[error("Tree document not found: {path}")]
    TreeNotFound { path: PathBuf },

    /// Tree document could not be deserialized.
    #[error("Failed to parse tree document at {path}: {message}")]
    TreeParseError { path: PathBuf, message: String },

    /// Project settings file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Project settings file could not be deserialized.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Schema source could not be read as lines.
    #[error("Failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rewritten schema source could not be persisted.
    #[error("Failed to write {path}: {source}")]
    WriteSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for protostyle operations.
pub type Result<T> = std::result::Result<T, ProtostyleError>;
