//! Admin identities: the privileged accounts allowed to see statistics and manage the menu.
//!
//! Admins are created once and never modified. The password digest is kept out of every
//! `Debug` rendering so it cannot leak into the actor's debug logs.

use serde::Serialize;
use std::fmt;

surrogate_id!(
    /// Type-safe identifier for Admins.
    AdminId
);

/// Role given to accounts created through registration.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, PartialEq)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub hashed_password: String,
    pub role: String,
}

impl Admin {
    /// The public view of this admin, without the digest.
    pub fn profile(&self) -> AdminProfile {
        AdminProfile {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Payload for creating a new admin. The password must already be hashed.
#[derive(Clone, PartialEq)]
pub struct AdminCreate {
    pub username: String,
    pub hashed_password: String,
    pub role: String,
}

impl AdminCreate {
    pub fn new(username: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hashed_password: hashed_password.into(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

impl fmt::Debug for AdminCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCreate")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// What the API returns about an admin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminProfile {
    pub id: AdminId,
    pub username: String,
    pub role: String,
}
