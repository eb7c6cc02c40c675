//! Error types for the SIBA core.
//!
//! Errors are split by domain: configuration, loading the dataset, and validating user input.
//! Validation failures are ordinary values that the pages render next to their inputs; the
//! session store wraps them in [`Error`] only so add/submit operations can use `?`.

pub mod config;
pub mod data;
pub mod validation;

use thiserror::Error;

pub use config::ConfigError;
pub use data::DataLoadError;
pub use validation::ValidationError;

/// Main error type for the SIBA core.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid data URL).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The dataset could not be fetched or parsed.
    #[error(transparent)]
    DataLoadError(#[from] DataLoadError),
    /// User input was rejected, with a message per field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// No record with the given key exists in the session collection.
    #[error("No {kind} record with key {key:?}")]
    NotFound { kind: &'static str, key: String },
}
