//! # Admin Client
//!
//! The Credential Store interface. Holds only digests; hashing happens in
//! [`AuthService`](crate::auth::AuthService) before anything reaches the actor.
use crate::admin_actor::AdminError;
use crate::model::{Admin, AdminCreate, AdminProfile};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Admin actor.
#[derive(Clone)]
pub struct AdminClient {
    inner: ResourceClient<Admin>,
}

impl AdminClient {
    pub fn new(inner: ResourceClient<Admin>) -> Self {
        Self { inner }
    }

    /// Stores a new admin. Fails with [`AdminError::UsernameTaken`] if the username exists.
    #[instrument(skip(self, params), fields(username = %params.username))]
    pub async fn create_admin(&self, params: AdminCreate) -> Result<AdminProfile, AdminError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .map(|admin| admin.profile())
            .ok_or_else(|| AdminError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, AdminError> {
        debug!("Sending request");
        self.inner
            .find_by_key(username)
            .await
            .map_err(Self::map_error)
    }

    /// Whether any admin has been registered yet.
    pub async fn has_admins(&self) -> Result<bool, AdminError> {
        Ok(!self.list().await?.is_empty())
    }
}

#[async_trait]
impl ActorClient<Admin> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &ResourceClient<Admin> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<AdminError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => AdminError::NotFound(id),
            Err(FrameworkError::Conflict(username)) => AdminError::UsernameTaken(username),
            Err(other) => AdminError::StoreError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_conflict_maps_to_username_taken() {
        let mut mock = MockClient::<Admin>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict("alice".into()));

        let client = AdminClient::new(mock.client());
        let result = client.create_admin(AdminCreate::new("alice", "digest")).await;

        assert_eq!(result, Err(AdminError::UsernameTaken("alice".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_lookup_by_username() {
        let mut mock = MockClient::<Admin>::new();
        mock.expect_find_by_key("ghost").return_ok(None);

        let client = AdminClient::new(mock.client());
        assert_eq!(client.find_by_username("ghost").await, Ok(None));
        mock.verify();
    }
}
