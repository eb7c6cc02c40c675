//! Dataset loading error types.
//!
//! A load failure is never fatal: the client logs it and keeps rendering with empty collections.

use thiserror::Error;

/// Failure to obtain or decode the dataset document.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The request could not be sent or its body could not be read.
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The server answered with a non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The dataset file could not be read from disk.
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    /// The body is not a valid dataset document.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
