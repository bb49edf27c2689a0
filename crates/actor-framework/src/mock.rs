//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a real [`ResourceActor`](crate::ResourceActor).
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered, in order, from
//! a queue of scripted expectations. This makes failure paths that are hard to provoke with a live
//! actor (a closed store, a dropped response) trivial to test.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32 }
//! #[derive(Debug)] struct DishCreate;
//! #[derive(Debug)] struct DishUpdate;
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = DishUpdate;
//!     type Action = DishAction; type ActionResult = (); type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the response scripted for it.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    CreateMany(Result<Vec<T::Id>, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    FindByKey(String, Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation (wrong operation or wrong id) panics the mock task, which
/// surfaces to the caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::CreateMany { respond_to, .. },
                        Some(Expectation::CreateMany(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get(expected, response)),
                    ) => {
                        assert_eq!(id, expected, "unexpected id in get");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindByKey { key, respond_to },
                        Some(Expectation::FindByKey(expected, response)),
                    ) => {
                        assert_eq!(key, expected, "unexpected key in find_by_key");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(expected, response)),
                    ) => {
                        assert_eq!(id, expected, "unexpected id in update");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(expected, response)),
                    ) => {
                        assert_eq!(id, expected, "unexpected id in delete");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(expected, response)),
                    ) => {
                        assert_eq!(id, expected, "unexpected id in action");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn expect<R: 'static>(
        &mut self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.expect(Expectation::Create)
    }

    /// Expects a `create_many` operation.
    pub fn expect_create_many(&mut self) -> ExpectationBuilder<T, Vec<T::Id>> {
        self.expect(Expectation::CreateMany)
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.expect(move |response| Expectation::Get(id, response))
    }

    /// Expects a `find_by_key` operation for `key`.
    pub fn expect_find_by_key(
        &mut self,
        key: impl Into<String>,
    ) -> ExpectationBuilder<T, Option<T>> {
        let key = key.into();
        self.expect(move |response| Expectation::FindByKey(key, response))
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(Expectation::List)
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.expect(move |response| Expectation::Update(id, response))
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.expect(move |response| Expectation::Delete(id, response))
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.expect(move |response| Expectation::Action(id, response))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods; finish it with a response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.respond(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.respond(Err(error));
    }

    fn respond(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Table {
        id: u32,
        seats: u32,
    }

    #[derive(Debug)]
    struct TableCreate {
        seats: u32,
    }

    #[derive(Debug)]
    struct TableUpdate;

    #[derive(Debug)]
    enum TableAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Table error")]
    struct TableError;

    #[async_trait]
    impl ActorEntity for Table {
        type Id = u32;
        type Create = TableCreate;
        type Update = TableUpdate;
        type Action = TableAction;
        type ActionResult = ();
        type Context = ();
        type Error = TableError;

        fn from_create_params(id: u32, params: TableCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                seats: params.seats,
            })
        }

        async fn on_update(&mut self, _update: TableUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: TableAction,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Table { id: 1, seats: 4 }));
        mock.expect_list().return_ok(vec![Table { id: 1, seats: 4 }]);
        mock.expect_delete(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();

        let id = client.create(TableCreate { seats: 4 }).await.unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.map(|t| t.seats), Some(4));

        assert_eq!(client.list().await.unwrap().len(), 1);

        let deleted = client.delete(1).await;
        assert!(matches!(deleted, Err(FrameworkError::NotFound(id)) if id == "1"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();
        let result = client.get(7).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
