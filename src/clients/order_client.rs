//! # Order Client
//!
//! The Order Lifecycle Service: creation, checkout, status transitions and deletion,
//! on top of the Order Store actor.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Creates a pending order and returns the stored record.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Creates one pending order per cart entry, all or none.
    ///
    /// Returns the number of orders created. An empty cart succeeds with zero.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn checkout(&self, items: Vec<OrderCreate>) -> Result<usize, OrderError> {
        if items.is_empty() {
            return Ok(0);
        }
        let ids = self
            .inner
            .create_many(items)
            .await
            .map_err(Self::map_error)?;
        info!(count = ids.len(), "Checkout stored");
        Ok(ids.len())
    }

    /// Sets the status of an existing order unconditionally.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::StoreError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_update_missing_order_maps_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(9))
            .return_err(FrameworkError::NotFound("9".into()));

        let client = OrderClient::new(mock.client());
        let result = client.update_status(OrderId(9), OrderStatus::Completed).await;

        assert_eq!(result, Err(OrderError::NotFound("9".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create_many().return_err(FrameworkError::EntityError(Box::new(
            OrderError::ValidationError("item must not be empty".into()),
        )));

        let client = OrderClient::new(mock.client());
        let result = client.checkout(vec![OrderCreate::new("", None)]).await;

        assert_eq!(
            result,
            Err(OrderError::ValidationError("item must not be empty".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_is_a_store_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        assert!(matches!(client.list().await, Err(OrderError::StoreError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_checkout_never_reaches_the_store() {
        let mock = MockClient::<Order>::new();
        let client = OrderClient::new(mock.client());

        assert_eq!(client.checkout(vec![]).await, Ok(0));
        mock.verify();
    }
}
