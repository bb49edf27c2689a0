//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`actor_framework::ResourceActor`].

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    /// Creates a new pending Order, rejecting blank items and negative or non-finite prices.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.item.trim().is_empty() {
            return Err(OrderError::ValidationError("item must not be empty".into()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "price must be a non-negative number, got {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            item: params.item,
            status: OrderStatus::Pending,
            price: params.price,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
