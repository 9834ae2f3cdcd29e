//! Error types and error handling for docsearch.
//!
//! This module defines the error types used throughout the
//! engine. Absence of matches is never an error: scoring and
//! ranking always succeed, possibly with an empty result.

use crate::core::types::DocumentId;
use thiserror::Error;

/// Result type alias for docsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for docsearch
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid input: {0}")]
    InputFormat(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SearchError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::DocumentNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SearchError::InputFormat(_) | SearchError::InvalidState(_) | SearchError::ConfigError(_)
        )
    }
}
