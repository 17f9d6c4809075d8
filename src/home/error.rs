//! Error types for the smart-home remote.

use pattern_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while operating a television through the remote.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HomeError {
    /// The television must be on for this operation.
    #[error("{0} TV is powered off")]
    PoweredOff(String),

    #[error("Channel {channel} is out of range (1-{max})")]
    InvalidChannel { channel: u32, max: u32 },

    #[error("Volume {level} exceeds maximum {max}")]
    VolumeTooHigh { level: u8, max: u8 },

    /// The remote's history is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// An error occurred while communicating with the invoker.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for HomeError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NothingToUndo => HomeError::NothingToUndo,
            FrameworkError::EntityError(inner) => match inner.downcast::<HomeError>() {
                Ok(home) => *home,
                Err(other) => HomeError::ActorCommunicationError(other.to_string()),
            },
            other => HomeError::ActorCommunicationError(other.to_string()),
        }
    }
}
