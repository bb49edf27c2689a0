//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Resource clients translate
//! these into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already in use: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged for every other variant, or when the boxed error
    /// is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("bad price")]
    struct PriceError;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct OtherError;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(PriceError));
        assert_eq!(err.downcast_entity::<PriceError>().unwrap(), PriceError);
    }

    #[test]
    fn downcast_leaves_foreign_errors_alone() {
        let err = FrameworkError::EntityError(Box::new(OtherError));
        assert!(matches!(
            err.downcast_entity::<PriceError>(),
            Err(FrameworkError::EntityError(_))
        ));

        let err = FrameworkError::NotFound("3".into());
        assert!(matches!(
            err.downcast_entity::<PriceError>(),
            Err(FrameworkError::NotFound(id)) if id == "3"
        ));
    }
}
