//! # Mocking the Invoker
//!
//! Client wrappers built on [`InvokerClient`] can be tested without a real [`Invoker`](crate::Invoker)
//! in two ways.
//!
//! **Channel helpers.** [`create_mock_client`] returns a client plus the receiving end of its
//! channel. The test drives the conversation by hand with [`expect_execute`], [`expect_undo`],
//! [`expect_snapshot`] and [`expect_history`], answering each request on its responder.
//!
//! **Expectation queue.** [`MockInvoker`] answers requests from a queue of canned responses and
//! records the names of the commands it was asked to run.
//!
//! ```rust
//! use pattern_framework::mock::MockInvoker;
//! use pattern_framework::FrameworkError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockInvoker::<u32>::new();
//!     mock.expect_undo().return_err(FrameworkError::NothingToUndo);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.undo().await, Err(FrameworkError::NothingToUndo)));
//!     mock.verify();
//! }
//! ```

use crate::command::{BoxedCommand, InvokerClient, InvokerRequest, Response};
use crate::error::FrameworkError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION QUEUE
// =============================================================================

enum Expectation<T> {
    Execute(Result<(), FrameworkError>),
    Undo(Result<String, FrameworkError>),
    Snapshot(Result<T, FrameworkError>),
    History(Result<Vec<String>, FrameworkError>),
}

struct MockState<T> {
    expectations: VecDeque<Expectation<T>>,
    executed: Vec<String>,
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T>(state: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A stand-in invoker answering from a queue of expectations.
///
/// A request that doesn't match the next expectation is recorded as a mismatch and its
/// responder is dropped, so the caller sees [`FrameworkError::ActorDropped`].
/// [`MockInvoker::verify`] fails the test on mismatches or leftover expectations.
pub struct MockInvoker<T> {
    client: InvokerClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Send + 'static> MockInvoker<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<InvokerRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            executed: Vec::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (InvokerRequest::Execute { command, respond_to }, Some(Expectation::Execute(response))) => {
                        state.executed.push(command.name().to_string());
                        let _ = respond_to.send(response);
                    }
                    (InvokerRequest::Undo { respond_to }, Some(Expectation::Undo(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (InvokerRequest::Snapshot { respond_to }, Some(Expectation::Snapshot(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (InvokerRequest::History { respond_to }, Some(Expectation::History(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        let kind = match request {
                            InvokerRequest::Execute { .. } => "execute",
                            InvokerRequest::Undo { .. } => "undo",
                            InvokerRequest::Snapshot { .. } => "snapshot",
                            InvokerRequest::History { .. } => "history",
                        };
                        state.mismatches.push(format!("unexpected {kind} request"));
                    }
                }
            }
        });

        Self {
            client: InvokerClient::new(sender),
            state,
            _handle: handle,
        }
    }

    pub fn client(&self) -> InvokerClient<T> {
        self.client.clone()
    }

    pub fn expect_execute(&self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.state.clone(), Expectation::Execute)
    }

    pub fn expect_undo(&self) -> ExpectationBuilder<T, String> {
        ExpectationBuilder::new(self.state.clone(), Expectation::Undo)
    }

    pub fn expect_snapshot(&self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.state.clone(), Expectation::Snapshot)
    }

    pub fn expect_history(&self) -> ExpectationBuilder<T, Vec<String>> {
        ExpectationBuilder::new(self.state.clone(), Expectation::History)
    }

    /// Names of the commands received so far, in order.
    pub fn executed(&self) -> Vec<String> {
        lock(&self.state).executed.clone()
    }

    /// Panics if a request didn't match or an expectation was never consumed.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock invoker mismatches: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }
}

impl<T: Send + 'static> Default for MockInvoker<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues the response for one expected request.
pub struct ExpectationBuilder<T, V> {
    state: Shared<T>,
    wrap: fn(Result<V, FrameworkError>) -> Expectation<T>,
}

impl<T, V> ExpectationBuilder<T, V> {
    fn new(state: Shared<T>, wrap: fn(Result<V, FrameworkError>) -> Expectation<T>) -> Self {
        Self { state, wrap }
    }

    pub fn return_ok(self, value: V) {
        lock(&self.state).expectations.push_back((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.state).expectations.push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client<T>(buffer_size: usize) -> (InvokerClient<T>, mpsc::Receiver<InvokerRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InvokerClient::new(sender), receiver)
}

/// Next request, if it is an execute.
pub async fn expect_execute<T>(
    receiver: &mut mpsc::Receiver<InvokerRequest<T>>,
) -> Option<(BoxedCommand<T>, Response<()>)> {
    match receiver.recv().await {
        Some(InvokerRequest::Execute {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an undo.
pub async fn expect_undo<T>(receiver: &mut mpsc::Receiver<InvokerRequest<T>>) -> Option<Response<String>> {
    match receiver.recv().await {
        Some(InvokerRequest::Undo { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request, if it is a snapshot.
pub async fn expect_snapshot<T>(receiver: &mut mpsc::Receiver<InvokerRequest<T>>) -> Option<Response<T>> {
    match receiver.recv().await {
        Some(InvokerRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request, if it is a history query.
pub async fn expect_history<T>(
    receiver: &mut mpsc::Receiver<InvokerRequest<T>>,
) -> Option<Response<Vec<String>>> {
    match receiver.recv().await {
        Some(InvokerRequest::History { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::error::BoxError;

    #[derive(Debug)]
    struct Ring;

    impl Command<u32> for Ring {
        fn name(&self) -> &str {
            "ring"
        }

        fn execute(&mut self, bells: &mut u32) -> Result<(), BoxError> {
            *bells += 1;
            Ok(())
        }

        fn undo(&mut self, bells: &mut u32) -> Result<(), BoxError> {
            *bells -= 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn channel_helpers_hand_over_requests() {
        let (client, mut receiver) = create_mock_client::<u32>(4);

        let task = tokio::spawn(async move { client.execute(Ring).await });

        let (mut command, responder) = expect_execute(&mut receiver)
            .await
            .expect("Expected Execute request");
        assert_eq!(command.name(), "ring");

        let mut bells = 0;
        command.execute(&mut bells).unwrap();
        assert_eq!(bells, 1);
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn expectation_queue_answers_in_order() {
        let mock = MockInvoker::<u32>::new();
        mock.expect_execute().return_ok(());
        mock.expect_snapshot().return_ok(1);
        mock.expect_history().return_ok(vec!["ring".to_string()]);

        let client = mock.client();
        client.execute(Ring).await.unwrap();
        assert_eq!(client.snapshot().await.unwrap(), 1);
        assert_eq!(client.history().await.unwrap(), vec!["ring"]);

        assert_eq!(mock.executed(), vec!["ring"]);
        mock.verify();
    }

    #[tokio::test]
    async fn unexpected_request_drops_responder() {
        let mock = MockInvoker::<u32>::new();
        mock.expect_snapshot().return_ok(0);

        let client = mock.client();
        let result = client.undo().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
