//! Error types for the spamsift library.
//!
//! All failures in the pipeline are represented by the [`SpamsiftError`]
//! enum. Nothing here is transient — the pipeline is deterministic given its
//! inputs, so there is no retry story; every error is propagated to the
//! caller with enough context (stage, row index, field) to diagnose without
//! re-running.
//!
//! # Examples
//!
//! ```
//! use spamsift::error::{Result, SpamsiftError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamsiftError::config("train_fraction must be in (0, 1)"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for spamsift operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum SpamsiftError {
    /// I/O errors (reading training data, persisting models, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input data (unrecognized label, bad row shape)
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Invalid configuration (split fraction, smoothing constant, columns)
    #[error("Configuration error: {0}")]
    Config(String),

    /// `fit` was called with an empty training set
    #[error("Empty training set: {0}")]
    EmptyTrainingSet(String),

    /// `fit` was called with examples from a single class only
    #[error("Single class in training set: {0}")]
    SingleClass(String),

    /// `evaluate` was called with an empty test set
    #[error("Empty test set: {0}")]
    EmptyTestSet(String),

    /// Inference requested before the pipeline was fitted
    #[error("Model not fitted: {0}")]
    NotFitted(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpamsiftError.
pub type Result<T> = std::result::Result<T, SpamsiftError>;

impl SpamsiftError {
    /// Create a new data format error.
    pub fn data_format<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::DataFormat(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::Config(msg.into())
    }

    /// Create a new empty training set error.
    pub fn empty_training_set<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::EmptyTrainingSet(msg.into())
    }

    /// Create a new single class error.
    pub fn single_class<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::SingleClass(msg.into())
    }

    /// Create a new empty test set error.
    pub fn empty_test_set<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::EmptyTestSet(msg.into())
    }

    /// Create a new not fitted error.
    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        SpamsiftError::NotFitted(msg.into())
    }
}
