//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to standard **CRUD** operations on a resource store,
/// plus a custom `Action` variant for resource-specific logic:
///
/// - **Create** / **CreateMany**: Lifecycle start. `CreateMany` is all-or-nothing.
/// - **Get** / **FindByKey** / **List**: Retrieval.
/// - **Update**: State mutation through [`ActorEntity::Update`].
/// - **Delete**: Lifecycle end.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    CreateMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
