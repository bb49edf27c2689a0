//! Error types for the Menu actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    #[error("Menu store error: {0}")]
    StoreError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::StoreError(msg)
    }
}
