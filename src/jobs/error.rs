//! Job store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the job cache
#[derive(Error, Debug)]
pub enum StoreError {
    /// Cache file could not be read
    #[error("Failed to read job cache {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache file is not valid JSON in the expected shape
    #[error("Failed to parse job cache {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Job data could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Unknown recruiting channel
    #[error("Invalid job type: {0}")]
    InvalidJobType(String),
}

/// Result type for job store operations
pub type StoreResult<T> = Result<T, StoreError>;
