//! Error types for authentication and authorization.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Unknown username or wrong password. The two are deliberately indistinguishable.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    /// The token is valid but its role may not access this resource.
    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Token could not be issued: {0}")]
    Signing(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Credential store error: {0}")]
    StoreError(String),
}

impl AuthError {
    /// Whether this error comes from a rejected bearer token rather than a server fault.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::InvalidSignature
                | AuthError::Expired
                | AuthError::Malformed
                | AuthError::Forbidden
        )
    }
}
