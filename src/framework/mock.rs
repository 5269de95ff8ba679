//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without spawning a real actor.
//!
//! Use [`MockClient`] for the fluent expectation API, or [`create_mock_client`] together with
//! [`expect_action`] / [`expect_get`] to drive the receiving end by hand.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Every action that reaches the mock is recorded, so tests can assert on the
/// payload (e.g. the amount charged) after the fact.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<PaymentLedger>::new();
/// mock.expect_action(AccountId::try_from(1_i64)?).return_ok(PaymentActionResult::Charged { total_charged: 25 });
///
/// let client = PaymentClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    received: Arc<Mutex<Vec<(T::Id, T::Action)>>>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// A request that matches no expectation is answered with
    /// [`FrameworkError::Custom`] describing the mismatch, and [`MockClient::verify`]
    /// reports it.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();
        let mismatches_clone = mismatches.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            let mismatch = |message: String| {
                mismatches_clone.lock().unwrap().push(message.clone());
                FrameworkError::Custom(message)
            };

            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        let response = if id == expected {
                            response
                        } else {
                            Err(mismatch(format!("Get addressed to {id}, expected {expected}")))
                        };
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action {
                            id,
                            action,
                            respond_to,
                        },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        let response = if id == expected {
                            response
                        } else {
                            Err(mismatch(format!(
                                "Action {action:?} addressed to {id}, expected {expected}"
                            )))
                        };
                        received_clone.lock().unwrap().push((id, action));
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, other) => {
                        let error = mismatch(format!("Unexpected get for {id}: {}", describe(&other)));
                        let _ = respond_to.send(Err(error));
                    }
                    (
                        ResourceRequest::Action {
                            id,
                            action,
                            respond_to,
                        },
                        other,
                    ) => {
                        let error = mismatch(format!(
                            "Unexpected action {action:?} for {id}: {}",
                            describe(&other)
                        ));
                        received_clone.lock().unwrap().push((id, action));
                        let _ = respond_to.send(Err(error));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            received,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of actions the mock has answered so far.
    pub fn action_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Verifies that every request matched an expectation and all expectations were met.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock received mismatched requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

fn describe<T: ActorEntity>(expectation: &Option<Expectation<T>>) -> &'static str {
    match expectation {
        None => "no expectation left",
        Some(Expectation::Get { .. }) => "expected a get",
        Some(Expectation::Action { .. }) => "expected an action",
    }
}

impl<T: ActorEntity> MockClient<T>
where
    T::Action: Clone,
{
    /// Returns every action received, in arrival order.
    pub fn received_actions(&self) -> Vec<(T::Id, T::Action)> {
        self.received.lock().unwrap().clone()
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When only the *client* logic is under test (e.g. how `PaymentClient` maps results),
/// there is no need for a real `ResourceActor`. The returned client sends into a channel
/// the test controls, so it can inspect each request and answer it deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
