//! Error types for tripview-core
//!
//! Normalization never fails; anomalies in a travel plan are reported as
//! [`crate::types::Warning`] values. This type covers the ambient edges only:
//! reading input, loading configuration, and setting up logging.

use thiserror::Error;

/// Main error type for the tripview-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for tripview-core
pub type Result<T> = std::result::Result<T, Error>;
