//! Login and registration on top of the Credential Store.

use super::{AccessToken, AuthError, PasswordHasher, TokenIssuer};
use crate::admin_actor::AdminError;
use crate::clients::AdminClient;
use crate::model::{AdminCreate, AdminProfile};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AuthService {
    admins: AdminClient,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(
        admins: AdminClient,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            admins,
            hasher,
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Exchanges a username and password for a bearer token carrying the stored role.
    ///
    /// Unknown users and wrong passwords both fail with [`AuthError::InvalidCredentials`].
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let admin = self
            .admins
            .find_by_username(username)
            .await
            .map_err(|e| AuthError::StoreError(e.to_string()))?;

        let Some(admin) = admin else {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let password = password.to_string();
        let digest = admin.hashed_password.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        if !matches {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&admin.username, &admin.role)?;
        info!(role = %admin.role, "Login succeeded");
        Ok(AccessToken::bearer(token))
    }

    /// Registers a new admin, storing only the password digest.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminProfile, AdminError> {
        if password.is_empty() {
            return Err(AdminError::ValidationError("password must not be empty".into()));
        }
        // Skips hashing for taken names; the actor's unique index stays authoritative.
        if self.admins.find_by_username(username).await?.is_some() {
            return Err(AdminError::UsernameTaken(username.to_string()));
        }

        let hasher = self.hasher.clone();
        let password = password.to_string();
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AdminError::HashingError(e.to_string()))?
            .map_err(|e| AdminError::HashingError(e.to_string()))?;

        let profile = self
            .admins
            .create_admin(AdminCreate::new(username, digest))
            .await?;
        info!(id = %profile.id, "Admin registered");
        Ok(profile)
    }
}
