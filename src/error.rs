//! Error types for the schema store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StudioError>;

/// Schema store errors
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Invalid schema document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
