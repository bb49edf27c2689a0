//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored record (Order, Admin, MenuItem, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types for IDs,
//! DTOs, actions, context, and errors, and provides lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//!
//! You do **not** need to implement these unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing them to `run()` instead of `new()`).
///
/// # Identity
/// IDs are surrogate keys generated by the actor from a monotonic `u32` counter, so `Id`
/// must be constructible from `u32`. They are also `Ord`: listing returns records in id order,
/// which is insertion order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per actor rather than one per message. Clients deal with a single
    /// `OrderError` type, at the cost of `OrderError` being the union of every failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`, and is where payload validation lives.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Secondary key that must be unique across the store (e.g. a username).
    ///
    /// The actor rejects a create whose key is already held by another record, and
    /// [`ResourceClient::find_by_key`](crate::ResourceClient::find_by_key) looks records up by it.
    /// Entities without such a key keep the default `None`.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
