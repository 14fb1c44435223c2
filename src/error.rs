//! Error types for FileDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FileDbError
pub type Result<T> = std::result::Result<T, FileDbError>;

/// Unified error type for FileDB operations
#[derive(Debug, Error)]
pub enum FileDbError {
    // -------------------------------------------------------------------------
    // Key Precondition Errors
    // -------------------------------------------------------------------------
    #[error("Empty string given as key")]
    EmptyKey,

    #[error("Key already exists: {0}")]
    AlreadyExists(String),

    #[error("Key not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Directory Errors
    // -------------------------------------------------------------------------
    #[error("Storage directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Record corruption detected: {0}")]
    Corruption(String),
}

impl FileDbError {
    /// True for the errors a caller should branch on when choosing between
    /// create, update and upsert (as opposed to storage faults).
    pub fn is_key_state(&self) -> bool {
        matches!(self, FileDbError::AlreadyExists(_) | FileDbError::NotFound(_))
    }
}
