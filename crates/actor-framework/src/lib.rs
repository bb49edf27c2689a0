//! # Actor Framework
//!
//! The storage engine behind the ordering backend: a **Resource-Oriented Architecture (ROA)**
//! store built on the **Actor Model**. Every resource type (orders, admins, menu items) lives in
//! its own actor, which owns its records exclusively and processes requests one at a time.
//!
//! ## Why an actor per resource?
//!
//! - Isolated state (no shared memory, no locks)
//! - Sequential processing within each actor, so concurrent writes to the same record
//!   are serialized without application-level locking
//! - A cloneable client handle that request handlers can share freely
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Domain records, validation and unique keys
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, id generation, atomic commits
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] struct DishUpdate { name: Option<String> }
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DishError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         if params.name.is_empty() {
//!             return Err(DishError("name must not be empty".into()));
//!         }
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(DishCreate { name: "Tea".into() }).await.unwrap();
//!     let dish = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(dish.name, "Tea");
//!
//!     // Either both are stored or neither is.
//!     let batch = vec![DishCreate { name: "Cake".into() }, DishCreate { name: String::new() }];
//!     assert!(client.create_many(batch).await.is_err());
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that answers requests from
//! scripted expectations, so client logic can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
