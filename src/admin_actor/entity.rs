//! Entity trait implementation for the Admin domain type.
//!
//! Usernames are the unique key, so the actor itself rejects duplicate registrations.

use super::AdminError;
use crate::model::{Admin, AdminCreate, AdminId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Admin {
    type Id = AdminId;
    type Create = AdminCreate;
    type Update = (); // Admins are immutable
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = AdminError;

    fn from_create_params(id: AdminId, params: AdminCreate) -> Result<Self, Self::Error> {
        if params.username.trim().is_empty() {
            return Err(AdminError::ValidationError("username must not be empty".into()));
        }
        if params.role.is_empty() {
            return Err(AdminError::ValidationError("role must not be empty".into()));
        }
        Ok(Self {
            id,
            username: params.username,
            hashed_password: params.hashed_password,
            role: params.role,
        })
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
