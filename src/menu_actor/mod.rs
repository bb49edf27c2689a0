//! # Menu Actor
//!
//! The menu catalog. Items are added and removed by admins and listed publicly.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new() -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
