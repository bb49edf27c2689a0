//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. It processes its messages *sequentially*, so two
/// concurrent writes to the same record are applied one after the other and no
/// `Mutex` is needed around the store.
///
/// # Implementation Details
///
/// * `store` is a `BTreeMap` so that [`ResourceRequest::List`] returns records in id order.
/// * `keys` indexes [`ActorEntity::unique_key`] values to their owning id.
/// * `next_id` is a monotonic `u32`; ids are never reused, even after deletes.
///
/// ## Atomicity
///
/// Every mutation is computed on a copy and committed only when all hooks succeed,
/// so a failed request leaves the store exactly as it was:
///
/// * **Create**: build, run `on_create`, check the unique key, insert.
/// * **CreateMany**: same as Create for every entry (keys are also checked within the batch);
///   the first failure aborts the whole batch and no id is consumed.
/// * **Update** / **Action**: run the hook on a clone, re-check the unique key, swap in.
/// * **Delete**: run `on_delete`, then remove the record and its key.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    keys: HashMap<String, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            keys: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "voice_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    match self.build(id.clone(), params, &context).await {
                        Ok(item) => {
                            self.next_id += 1;
                            self.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::CreateMany { params, respond_to } => {
                    let count = params.len();
                    debug!(entity_type, count, "CreateMany");
                    match self.build_batch(params, &context).await {
                        Ok(items) => {
                            let mut ids = Vec::with_capacity(items.len());
                            for (id, item) in items {
                                self.insert(id.clone(), item);
                                ids.push(id);
                            }
                            self.next_id += ids.len() as u32;
                            info!(entity_type, count, size = self.store.len(), "Created batch");
                            let _ = respond_to.send(Ok(ids));
                        }
                        Err(e) => {
                            warn!(entity_type, count, error = %e, "Batch rolled back");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self
                        .keys
                        .get(&key)
                        .and_then(|id| self.store.get(id))
                        .cloned();
                    debug!(entity_type, found = item.is_some(), "FindByKey");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    match self.replace(&id, item) {
                        Ok(updated) => {
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(updated));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(removed) = self.store.remove(&id) {
                        if let Some(key) = removed.unique_key() {
                            self.keys.remove(key);
                        }
                    }
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut item = current.clone();
                    let result = match item.handle_action(action, &context).await {
                        Ok(value) => self.replace(&id, item).map(|_| value),
                        Err(e) => Err(FrameworkError::EntityError(Box::new(e))),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn build(
        &self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if let Some(key) = item.unique_key() {
            if self.keys.contains_key(key) {
                return Err(FrameworkError::Conflict(key.to_string()));
            }
        }
        Ok(item)
    }

    async fn build_batch(
        &self,
        params: Vec<T::Create>,
        context: &T::Context,
    ) -> Result<Vec<(T::Id, T)>, FrameworkError> {
        let mut items = Vec::with_capacity(params.len());
        let mut batch_keys = HashSet::new();
        for (offset, entry) in params.into_iter().enumerate() {
            let id = T::Id::from(self.next_id + offset as u32);
            let item = self.build(id.clone(), entry, context).await?;
            if let Some(key) = item.unique_key() {
                if !batch_keys.insert(key.to_string()) {
                    return Err(FrameworkError::Conflict(key.to_string()));
                }
            }
            items.push((id, item));
        }
        Ok(items)
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if let Some(key) = item.unique_key() {
            self.keys.insert(key.to_string(), id.clone());
        }
        self.store.insert(id, item);
    }

    /// Swaps in a modified copy of an existing record, keeping the key index consistent.
    fn replace(&mut self, id: &T::Id, item: T) -> Result<T, FrameworkError> {
        let new_key = item.unique_key().map(str::to_string);
        if let Some(key) = &new_key {
            if self.keys.get(key).is_some_and(|owner| owner != id) {
                return Err(FrameworkError::Conflict(key.clone()));
            }
        }
        if let Some(old) = self.store.insert(id.clone(), item.clone()) {
            if let Some(old_key) = old.unique_key() {
                if new_key.as_deref() != Some(old_key) {
                    self.keys.remove(old_key);
                }
            }
        }
        if let Some(key) = new_key {
            self.keys.insert(key, id.clone());
        }
        Ok(item)
    }
}
