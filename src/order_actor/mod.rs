//! # Order Actor
//!
//! The Order Store: a [`ResourceActor`] holding every [`Order`], with status as the only
//! mutable field.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use voice_orders::order_actor;
//! use voice_orders::model::OrderCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let order = client.create_order(OrderCreate::new("Tea", Some(2.5))).await?;
//!     assert_eq!(order.status.as_str(), "pending");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
