//! # Admin Actor
//!
//! The Credential Store: admin identities keyed by a unique username.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Admin`]
//! - [`error`] - [`AdminError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AdminClient;
use crate::model::Admin;
use actor_framework::ResourceActor;

/// Creates a new Admin actor and its client.
pub fn new() -> (ResourceActor<Admin>, AdminClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = AdminClient::new(generic_client);

    (actor, client)
}
