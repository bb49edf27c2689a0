//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested status is not one of the known order states.
    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The order store could not be reached.
    #[error("Order store error: {0}")]
    StoreError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::StoreError(msg)
    }
}
