//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level rule violations live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed its format rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The phone number referenced by an edit/remove is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// Batch iteration was requested with a non-positive size
    #[error("Batch size must be a positive integer, got {0}")]
    InvalidBatchSize(usize),
}

/// Errors that can occur while saving or loading a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or holds invalid field values
    #[error("Snapshot decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an unknown format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
