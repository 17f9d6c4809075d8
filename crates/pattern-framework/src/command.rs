//! # Command Invoker
//!
//! Requests are reified as [`Command`] objects and handed to an [`Invoker`], an actor that owns
//! the receiver object and an undo history. Callers talk to it through a cloneable
//! [`InvokerClient`]; every request travels over an mpsc channel and is answered on a oneshot.
//!
//! # Architecture Note
//! The invoker task is the only place the receiver object is mutated, so commands run strictly
//! one after another and the history is never observed half-updated. No locks are involved.
//!
//! ```rust
//! use pattern_framework::{BoxError, Command, Invoker};
//!
//! #[derive(Debug)]
//! struct Add(i64);
//!
//! impl Command<i64> for Add {
//!     fn name(&self) -> &str { "add" }
//!     fn execute(&mut self, total: &mut i64) -> Result<(), BoxError> { *total += self.0; Ok(()) }
//!     fn undo(&mut self, total: &mut i64) -> Result<(), BoxError> { *total -= self.0; Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (invoker, client) = Invoker::new(0i64, 8);
//!     let handle = tokio::spawn(invoker.run());
//!
//!     client.execute(Add(5)).await.unwrap();
//!     client.execute(Add(2)).await.unwrap();
//!     client.undo().await.unwrap();
//!     assert_eq!(client.snapshot().await.unwrap(), 5);
//!
//!     drop(client);
//!     assert_eq!(handle.await.unwrap(), 5);
//! }
//! ```

use crate::error::{BoxError, FrameworkError};
use std::any::type_name;
use std::fmt;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// A reversible operation on a receiver object of type `T`.
pub trait Command<T>: Send + fmt::Debug {
    fn name(&self) -> &str;

    fn execute(&mut self, target: &mut T) -> Result<(), BoxError>;

    /// Reverts a previous successful [`Command::execute`].
    fn undo(&mut self, target: &mut T) -> Result<(), BoxError>;
}

pub type BoxedCommand<T> = Box<dyn Command<T>>;

/// Type alias for the one-shot response channel used by the invoker.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Messages understood by an [`Invoker`].
#[derive(Debug)]
pub enum InvokerRequest<T> {
    Execute {
        command: BoxedCommand<T>,
        respond_to: Response<()>,
    },
    /// Reverts the most recent command; answers with its name.
    Undo { respond_to: Response<String> },
    Snapshot { respond_to: Response<T> },
    History { respond_to: Response<Vec<String>> },
}

/// The actor owning the receiver object and the command history.
pub struct Invoker<T> {
    receiver: mpsc::Receiver<InvokerRequest<T>>,
    target: T,
    history: Vec<BoxedCommand<T>>,
}

impl<T> Invoker<T>
where
    T: Clone + Send + 'static,
{
    /// Creates the invoker around `target` and a client for it.
    ///
    /// `buffer_size` is the request channel capacity; senders wait when it is full.
    pub fn new(target: T, buffer_size: usize) -> (Self, InvokerClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let invoker = Self {
            receiver,
            target,
            history: Vec::new(),
        };
        (invoker, InvokerClient::new(sender))
    }

    /// Processes requests until every client is dropped, then hands back the receiver object.
    pub async fn run(mut self) -> T {
        let target_type = type_name::<T>().split("::").last().unwrap_or("Unknown");
        info!(target_type, "Invoker started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InvokerRequest::Execute {
                    mut command,
                    respond_to,
                } => {
                    debug!(target_type, command = command.name(), "Execute");
                    match command.execute(&mut self.target) {
                        Ok(()) => {
                            info!(target_type, command = command.name(), depth = self.history.len() + 1, "Executed");
                            self.history.push(command);
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(target_type, command = command.name(), error = %e, "Execute failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(e)));
                        }
                    }
                }
                InvokerRequest::Undo { respond_to } => {
                    let Some(mut command) = self.history.pop() else {
                        warn!(target_type, "Nothing to undo");
                        let _ = respond_to.send(Err(FrameworkError::NothingToUndo));
                        continue;
                    };
                    debug!(target_type, command = command.name(), "Undo");
                    match command.undo(&mut self.target) {
                        Ok(()) => {
                            info!(target_type, command = command.name(), depth = self.history.len(), "Undone");
                            let _ = respond_to.send(Ok(command.name().to_string()));
                        }
                        Err(e) => {
                            warn!(target_type, command = command.name(), error = %e, "Undo failed");
                            // Still the latest applied command; keep it for another attempt.
                            self.history.push(command);
                            let _ = respond_to.send(Err(FrameworkError::EntityError(e)));
                        }
                    }
                }
                InvokerRequest::Snapshot { respond_to } => {
                    debug!(target_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.target.clone()));
                }
                InvokerRequest::History { respond_to } => {
                    let names = self.history.iter().map(|c| c.name().to_string()).collect();
                    let _ = respond_to.send(Ok(names));
                }
            }
        }

        info!(target_type, depth = self.history.len(), "Shutdown");
        self.target
    }
}

/// Async handle to an [`Invoker`]. Cheap to clone; the invoker stops once every clone is gone.
pub struct InvokerClient<T> {
    sender: mpsc::Sender<InvokerRequest<T>>,
}

impl<T> Clone for InvokerClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> InvokerClient<T> {
    pub fn new(sender: mpsc::Sender<InvokerRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn execute<C>(&self, command: C) -> Result<(), FrameworkError>
    where
        C: Command<T> + 'static,
    {
        self.execute_boxed(Box::new(command)).await
    }

    pub async fn execute_boxed(&self, command: BoxedCommand<T>) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InvokerRequest::Execute {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Reverts the latest successful command and returns its name.
    pub async fn undo(&self) -> Result<String, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InvokerRequest::Undo { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A copy of the receiver object as it is now.
    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InvokerRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Names of the commands that can still be undone, oldest first.
    pub async fn history(&self) -> Result<Vec<String>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(InvokerRequest::History { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Push(&'static str);

    impl Command<Vec<&'static str>> for Push {
        fn name(&self) -> &str {
            self.0
        }

        fn execute(&mut self, target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            target.push(self.0);
            Ok(())
        }

        fn undo(&mut self, target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            target.pop();
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Command<Vec<&'static str>> for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn execute(&mut self, _target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            Err("jammed".into())
        }

        fn undo(&mut self, _target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            Ok(())
        }
    }

    /// Applies fine, refuses to be taken back.
    #[derive(Debug)]
    struct Glued(&'static str);

    impl Command<Vec<&'static str>> for Glued {
        fn name(&self) -> &str {
            self.0
        }

        fn execute(&mut self, target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            target.push(self.0);
            Ok(())
        }

        fn undo(&mut self, _target: &mut Vec<&'static str>) -> Result<(), BoxError> {
            Err("stuck".into())
        }
    }

    #[tokio::test]
    async fn executes_and_undoes_in_reverse_order() {
        let (invoker, client) = Invoker::new(Vec::<&'static str>::new(), 4);
        tokio::spawn(invoker.run());

        client.execute(Push("a")).await.unwrap();
        client.execute(Push("b")).await.unwrap();
        assert_eq!(client.history().await.unwrap(), vec!["a", "b"]);

        assert_eq!(client.undo().await.unwrap(), "b");
        assert_eq!(client.snapshot().await.unwrap(), vec!["a"]);
        assert_eq!(client.undo().await.unwrap(), "a");
        assert!(matches!(client.undo().await, Err(FrameworkError::NothingToUndo)));
    }

    #[tokio::test]
    async fn failed_command_is_not_recorded() {
        let (invoker, client) = Invoker::new(Vec::<&'static str>::new(), 4);
        tokio::spawn(invoker.run());

        client.execute(Push("a")).await.unwrap();
        let result = client.execute(Broken).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.history().await.unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn failed_undo_keeps_command_in_history() {
        let (invoker, client) = Invoker::new(Vec::<&'static str>::new(), 4);
        tokio::spawn(invoker.run());

        client.execute(Push("a")).await.unwrap();
        client.execute(Glued("glue")).await.unwrap();

        for _ in 0..2 {
            let result = client.undo().await;
            assert!(matches!(result, Err(FrameworkError::EntityError(_))));
            assert_eq!(client.history().await.unwrap(), vec!["a", "glue"]);
        }
        assert_eq!(client.snapshot().await.unwrap(), vec!["a", "glue"]);
    }

    #[tokio::test]
    async fn dropping_clients_returns_final_state() {
        let (invoker, client) = Invoker::new(Vec::<&'static str>::new(), 4);
        let handle = tokio::spawn(invoker.run());

        let other = client.clone();
        other.execute(Push("x")).await.unwrap();
        drop(other);
        client.execute(Push("y")).await.unwrap();
        drop(client);

        assert_eq!(handle.await.unwrap(), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn closed_invoker_is_reported() {
        let (invoker, client) = Invoker::<Vec<&'static str>>::new(Vec::new(), 4);
        drop(invoker);
        assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
    }
}
