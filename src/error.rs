//! Error types for the Cairn library.
//!
//! This module provides comprehensive error handling for all Cairn operations.
//! All errors are represented by the [`CairnError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use cairn::error::{CairnError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(CairnError::embedding("Model unavailable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Cairn operations.
///
/// This enum represents all possible errors that can occur in the Cairn library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum CairnError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Embedding dimensionality does not match the rest of the corpus or the query.
    ///
    /// This is a data-integrity failure: a ranking call that hits it fails as
    /// a whole rather than silently skipping the offending entry.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A vector with zero length where a real embedding is required.
    #[error("Empty vector: {0}")]
    EmptyVector(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Embedding-generation errors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CairnError.
pub type Result<T> = std::result::Result<T, CairnError>;

impl CairnError {
    /// Create a new dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        CairnError::DimensionMismatch { expected, actual }
    }

    /// Create a new empty vector error.
    pub fn empty_vector<S: Into<String>>(msg: S) -> Self {
        CairnError::EmptyVector(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        CairnError::Storage(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        CairnError::Embedding(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        CairnError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CairnError::InvalidOperation(format!("Invalid argument: {}", msg.into()))
    }
}
