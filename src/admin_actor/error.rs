//! Error types for the Admin actor.

use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The requested admin was not found.
    #[error("Admin not found: {0}")]
    NotFound(String),

    /// Another admin already uses this username.
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// The admin data provided is invalid.
    #[error("Admin validation error: {0}")]
    ValidationError(String),

    /// The password could not be hashed.
    #[error("Password hashing failed: {0}")]
    HashingError(String),

    /// The credential store could not be reached.
    #[error("Admin store error: {0}")]
    StoreError(String),
}

impl From<String> for AdminError {
    fn from(msg: String) -> Self {
        AdminError::StoreError(msg)
    }
}
