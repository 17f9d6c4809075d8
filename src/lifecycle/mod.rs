//! # System Lifecycle
//!
//! [`HomeSystem`] spawns the invoker that owns the remote and hands out its client.
//! Shutdown drops the client, which closes the channel; the invoker's loop ends and
//! returns the final remote.

use crate::clients::HomeClient;
use crate::home::{self, HomeError, Remote};
use tokio::task::JoinHandle;
use tracing::info;

pub struct HomeSystem {
    pub home_client: HomeClient,
    handle: JoinHandle<Remote>,
}

impl HomeSystem {
    /// Starts the invoker. Must be called inside a tokio runtime.
    pub fn new(remote: Remote) -> Self {
        let (invoker, home_client) = home::new(remote);
        let handle = tokio::spawn(invoker.run());
        Self {
            home_client,
            handle,
        }
    }

    /// Stops the invoker and returns the remote in its final state.
    ///
    /// Clones of the client held elsewhere keep the invoker alive; drop them first.
    pub async fn shutdown(self) -> Result<Remote, HomeError> {
        drop(self.home_client);
        let remote = self
            .handle
            .await
            .map_err(|e| HomeError::ActorCommunicationError(e.to_string()))?;
        info!(status = ?remote.status(), "Home system stopped");
        Ok(remote)
    }
}
