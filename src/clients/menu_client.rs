//! # Menu Client
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<MenuError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::StoreError(other.to_string()),
        }
    }
}
