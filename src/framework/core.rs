//! # Core Actor Framework
//!
//! This module defines the generic building blocks the in-process gateways run on.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every ledger type must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and Actions)
// =============================================================================

/// Trait that any entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// By defining one contract that both gateway ledgers satisfy, the message loop in
/// [`ResourceActor`] is written *once* and reused for payments and seat bookings.
///
/// Associated types keep the two apart at compile time: a `PaymentAction` can never be
/// sent to the seat-booking actor.
///
/// # Lazy Opening
/// Gateways address entities by an id the *caller* already owns (an account number),
/// so there is no explicit create step. The first action addressed to an unknown id
/// opens a fresh entity through [`ActorEntity::open`].
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Enum representing entity-specific operations (e.g., `MakePayment`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Builds the empty entity for an id seen for the first time.
    fn open(id: Self::Id) -> Self;

    /// Handle an entity-specific action.
    async fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Get**: Fetches the current state of an entity by ID, if it has been opened.
/// - **Action**: Executes an [`ActorEntity::Action`], opening the entity first if needed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store`
/// needs no `Mutex` or `RwLock`. Exclusive ownership inside the task is the lock.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "PaymentLedger" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let opened = !self.store.contains_key(&id);
                    let item = self
                        .store
                        .entry(id.clone())
                        .or_insert_with(|| T::open(id.clone()));

                    let result = item
                        .handle_action(action)
                        .await
                        .map_err(FrameworkError::Custom);
                    match &result {
                        Ok(_) => info!(entity_type, %id, opened, "Action ok"),
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            // A failed first action leaves nothing behind
                            if opened {
                                self.store.remove(&id);
                            }
                        }
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        total: u32,
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(u32),
        Fail,
    }

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Action = TallyAction;
        type ActionResult = u32;

        fn open(id: u32) -> Self {
            Self { id, total: 0 }
        }

        async fn handle_action(&mut self, action: TallyAction) -> Result<u32, String> {
            match action {
                TallyAction::Add(n) => {
                    self.total += n;
                    Ok(self.total)
                }
                TallyAction::Fail => Err("refused".to_string()),
            }
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_action_opens_entity_and_accumulates() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run());

        // Nothing exists before the first action
        assert_eq!(client.get(7).await.unwrap(), None);

        assert_eq!(client.perform_action(7, TallyAction::Add(3)).await.unwrap(), 3);
        assert_eq!(client.perform_action(7, TallyAction::Add(4)).await.unwrap(), 7);

        let tally = client.get(7).await.unwrap().unwrap();
        assert_eq!(tally, Tally { id: 7, total: 7 });

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_first_action_leaves_no_entity() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let result = client.perform_action(1, TallyAction::Fail).await;
        assert_eq!(result, Err(FrameworkError::Custom("refused".to_string())));
        assert_eq!(client.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Tally>::new(1);
        drop(actor);

        let result = client.perform_action(1, TallyAction::Add(1)).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
