//! Error types and error handling for studypack.
//!
//! This module defines the error types used throughout the
//! crate. Adapters (the CLI) decide how to present them.

use thiserror::Error;

/// Result type alias for studypack operations
pub type Result<T> = std::result::Result<T, StudyError>;

/// Main error type for studypack
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Document already exists: {0}")]
    DocumentAlreadyExists(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid chunk configuration: chunk_size={chunk_size}, overlap={overlap}: {reason}")]
    InvalidChunkConfig {
        chunk_size: usize,
        overlap: usize,
        reason: &'static str,
    },

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("File too large: {path} is {size_mb} MB (limit {limit_mb} MB)")]
    FileTooLarge {
        path: String,
        size_mb: u64,
        limit_mb: usize,
    },

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl StudyError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StudyError::DocumentNotFound(_) | StudyError::InvalidPath(_)
        )
    }

    /// Check if this is a conflict error (already exists)
    pub fn is_conflict(&self) -> bool {
        matches!(self, StudyError::DocumentAlreadyExists(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            StudyError::InvalidDocument(_)
                | StudyError::InvalidChunkConfig { .. }
                | StudyError::UnsupportedFile(_)
                | StudyError::FileTooLarge { .. }
                | StudyError::ConfigError(_)
        )
    }
}
