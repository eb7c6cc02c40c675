use thiserror::Error;

use crate::engine::validation::{FieldErrors, OrderField, StockField};

/// User input rejected by one of the form validators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid stock form: {0}")]
    Stock(FieldErrors<StockField>),
    #[error("Invalid order form: {0}")]
    Order(FieldErrors<OrderField>),
    /// A journey entry was submitted without a note.
    #[error("{0}")]
    Journey(String),
}
