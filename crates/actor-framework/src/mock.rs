//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of scripted expectations instead of a running actor.
//! Use it to test code *around* a client (domain clients, controllers, actors
//! with dependencies) deterministically and with easy error injection.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real state |
//! | **Error Injection** | `return_err(...)` | Requires specific state |
//! | **Use Case** | Logic around the client | The actor itself / full system |
//!
//! ## Testing Patterns
//!
//! 1. **Client logic**: wrap `mock.client()` in a domain client, script replies.
//! 2. **Single actor**: spawn a real `ResourceActor` with `()` context.
//! 3. **Actor with mocked dependencies**: spawn a real actor whose context holds
//!    mocked clients (see the purchase-order actor tests of the application crate).
//! 4. **Full system**: the application's lifecycle integration tests.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Account { id: u32 }
//! #[derive(Debug)] struct AccountCreate;
//! #[derive(Debug)] struct AccountUpdate;
//! #[derive(Debug)] enum AccountAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct AccountError;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u32; type Create = AccountCreate; type Update = AccountUpdate; type Query = ();
//!     type Action = AccountAction; type ActionResult = (); type Context = (); type Error = AccountError;
//!     fn from_create_params(id: u32, _: AccountCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: AccountUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: AccountAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Account>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! The lower-level [`create_mock_client`] + `expect_*` receiver helpers let a
//! test inspect the raw request payloads before answering them.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request to the mock.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    GetOrCreate {
        id: Option<T::Id>,
        response: Result<(T::Id, bool), FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::GetOrCreate { id, .. } => format!("GetOrCreate({id:?})"),
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::List { .. } => "List".to_string(),
            Expectation::Update { id, .. } => format!("Update({id})"),
            Expectation::Delete { id, .. } => format!("Delete({id})"),
            Expectation::Action { id, .. } => format!("Action({id})"),
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { .. } => "Create".to_string(),
        ResourceRequest::GetOrCreate { id, .. } => format!("GetOrCreate({id:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::List { query, .. } => format!("List({query:?})"),
        ResourceRequest::Update { id, .. } => format!("Update({id})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched in order against the queued expectations. A request
/// that does not match the head of the queue (wrong kind or wrong ID) is
/// answered with `FrameworkError::ActorDropped` and recorded; [`MockClient::verify`]
/// then panics with the recorded mismatches.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn id_matches<I: PartialEq + Debug>(expected: &I, actual: &I, log: &mut Vec<String>) -> bool {
    if expected == actual {
        true
    } else {
        log.push(format!("expected id {expected:?}, got {actual:?}"));
        false
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime; the replies are served by a
    /// background task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let log = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();
                let mut log = log.lock().expect("mock log poisoned");

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response)
                    }
                    (
                        ResourceRequest::GetOrCreate { id, respond_to, .. },
                        Some(Expectation::GetOrCreate { id: expected, response }),
                    ) => {
                        if id_matches(&expected, &id, &mut log) {
                            reply(respond_to, response)
                        } else {
                            reply(respond_to, Err(FrameworkError::ActorDropped))
                        }
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        if id_matches(&expected, &id, &mut log) {
                            reply(respond_to, response)
                        } else {
                            reply(respond_to, Err(FrameworkError::ActorDropped))
                        }
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        reply(respond_to, response)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        if id_matches(&expected, &id, &mut log) {
                            reply(respond_to, response)
                        } else {
                            reply(respond_to, Err(FrameworkError::ActorDropped))
                        }
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        if id_matches(&expected, &id, &mut log) {
                            reply(respond_to, response)
                        } else {
                            reply(respond_to, Err(FrameworkError::ActorDropped))
                        }
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        if id_matches(&expected, &id, &mut log) {
                            reply(respond_to, response)
                        } else {
                            reply(respond_to, Err(FrameworkError::ActorDropped))
                        }
                    }
                    (request, expectation) => {
                        let wanted = expectation
                            .map(|e| e.describe())
                            .unwrap_or_else(|| "nothing".to_string());
                        log.push(format!(
                            "unexpected request {}, expected {wanted}",
                            describe_request(&request)
                        ));
                        // dropping the request drops its responder; the caller sees ActorDropped
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Expect<'_, T, T::Id> {
        Expect::new(self, |response| Expectation::Create { response })
    }

    /// Expects a `get_or_create` operation for `id`.
    pub fn expect_get_or_create(&mut self, id: Option<T::Id>) -> Expect<'_, T, (T::Id, bool)> {
        Expect::new(self, move |response| Expectation::GetOrCreate { id, response })
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation (any query).
    pub fn expect_list(&mut self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, |response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> Expect<'_, T, T> {
        Expect::new(self, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> Expect<'_, T, ()> {
        Expect::new(self, move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().expect("mock log poisoned");
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {mismatches:?}");
        }
        let remaining = self.expectations.lock().expect("mock queue poisoned");
        if !remaining.is_empty() {
            let pending: Vec<String> = remaining.iter().map(|e| e.describe()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {pending:?}",
                remaining.len()
            );
        }
    }
}

/// Builder returned by the `expect_*` methods; finish with `return_ok` or `return_err`.
pub struct Expect<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'a>,
}

impl<'a, T: ActorEntity, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Replies with a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Replies with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test drives the "actor" side by hand: pull the next request with one of
/// the `expect_*` helpers, assert on its payload, and answer through the
/// returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<T::Query>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Supplier {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct SupplierCreate {
        name: String,
    }

    #[derive(Debug)]
    struct SupplierUpdate;

    #[derive(Debug)]
    enum SupplierAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Supplier error")]
    struct SupplierError;

    #[async_trait]
    impl ActorEntity for Supplier {
        type Id = u32;
        type Create = SupplierCreate;
        type Update = SupplierUpdate;
        type Query = ();
        type Action = SupplierAction;
        type ActionResult = ();
        type Context = ();
        type Error = SupplierError;

        fn from_create_params(id: u32, params: SupplierCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn on_update(
            &mut self,
            _update: SupplierUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: SupplierAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            match action {}
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payload() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SupplierCreate {
                    name: "Acme".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Acme");
        responder.send(Ok(7)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Supplier {
            id: 1,
            name: "Acme".to_string(),
        }));
        mock.expect_list().return_ok(vec![]);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        let id = client
            .create(SupplierCreate {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.get(1).await.unwrap().unwrap().name, "Acme");
        assert!(client.list(None).await.unwrap().is_empty());
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_is_reported() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_unused_expectation_fails_verify() {
        let mut mock = MockClient::<Supplier>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
