//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a store. Use it to test code *around* a client (HTTP
//! handlers, error mapping) without spawning the real actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, canned responses | Real store and validation |
//! | **Error Injection** | Easy (`return_err`) | Needs a specific store state |
//! | **Use Case** | Adapters and error mapping | Entity rules, full system |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError, Peers};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
//!     type Context = (); type Error = TagError;
//!     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TagUpdate, _: Peers<'_, Self>, _: &()) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_update(7).return_err(FrameworkError::NotFound("7".into()));
//!
//!     let client = mock.client();
//!     let result = client.update(7, TagUpdate).await;
//!     assert!(matches!(result, Err(FrameworkError::NotFound(_))));
//!
//!     mock.verify();
//! }
//! ```
//!
//! The lower-level [`create_mock_client`] returns the raw receiver so a test can
//! inspect each request payload and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{EntityResponse, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Outcome<T, V> = Result<V, FrameworkError<<T as ActorEntity>::Error>>;

/// An expected request and the canned response to send back.
enum Expectation<T: ActorEntity> {
    List { response: Outcome<T, Vec<T>> },
    Get { response: Outcome<T, Option<T>> },
    Create { response: Outcome<T, T> },
    Update { response: Outcome<T, T> },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request
/// that does not match the next expectation panics the background task,
/// which surfaces in the test as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` request for `id`.
    ///
    /// The id documents the test's intent; matching is by request kind and order.
    pub fn expect_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Update { response })
    }

    /// Panics if any registered expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<V>(&self, wrap: fn(Outcome<T, V>) -> Expectation<T>) -> ExpectationBuilder<T, V> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an expectation with the response the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, V> {
    wrap: fn(Outcome<T, V>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, V> ExpectationBuilder<T, V> {
    /// Answers the request with `value`.
    pub fn return_ok(self, value: V) {
        self.push(Ok(value));
    }

    /// Answers the request with `error`.
    pub fn return_err(self, error: FrameworkError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, response: Outcome<T, V>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back((self.wrap)(response));
    }
}

/// Creates a client and the raw receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the payload and responder of the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, EntityResponse<T, T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the id, payload and responder of the next request if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, EntityResponse<T, T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peers::Peers;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Genre {
        id: u32,
        title: String,
    }

    #[derive(Debug)]
    struct GenreCreate {
        title: String,
    }

    #[derive(Debug)]
    struct GenreUpdate {
        title: Option<String>,
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("genre rejected: {0}")]
    struct GenreError(String);

    #[async_trait]
    impl ActorEntity for Genre {
        type Id = u32;
        type Create = GenreCreate;
        type Update = GenreUpdate;
        type Context = ();
        type Error = GenreError;

        fn from_create_params(id: u32, params: GenreCreate) -> Result<Self, GenreError> {
            Ok(Self {
                id,
                title: params.title,
            })
        }

        async fn on_update(
            &mut self,
            update: GenreUpdate,
            _peers: Peers<'_, Self>,
            _ctx: &(),
        ) -> Result<(), GenreError> {
            if let Some(title) = update.title {
                self.title = title;
            }
            Ok(())
        }
    }

    fn genre(id: u32, title: &str) -> Genre {
        Genre {
            id,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Genre>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(GenreCreate {
                    title: "Drama".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.title, "Drama");
        responder.send(Ok(genre(1, "Drama"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(genre(1, "Drama")));
    }

    #[tokio::test]
    async fn test_mock_update_payload_is_visible() {
        let (client, mut receiver) = create_mock_client::<Genre>(10);

        let update_task = tokio::spawn(async move {
            client
                .update(
                    3,
                    GenreUpdate {
                        title: Some("Comedy".to_string()),
                    },
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 3);
        assert_eq!(update.title.as_deref(), Some("Comedy"));
        responder
            .send(Err(FrameworkError::Entity(GenreError("locked".into()))))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(
            result,
            Err(FrameworkError::Entity(GenreError("locked".into())))
        );
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Genre>::new();

        mock.expect_create().return_ok(genre(1, "Drama"));
        mock.expect_list().return_ok(vec![genre(1, "Drama")]);
        mock.expect_get().return_ok(None);
        mock.expect_update(9)
            .return_err(FrameworkError::NotFound("9".to_string()));

        let client = mock.client();

        let created = client
            .create(GenreCreate {
                title: "Drama".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        assert_eq!(client.get(2).await.unwrap(), None);

        let missing = client.update(9, GenreUpdate { title: None }).await;
        assert_eq!(missing, Err(FrameworkError::NotFound("9".to_string())));

        mock.verify();
    }
}
