//! Error types for the computer workshop.

use pattern_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkshopError {
    /// The build finished without a mandatory part.
    #[error("Missing part: {0}")]
    MissingPart(String),

    #[error("Workshop error: {0}")]
    Framework(String),
}

impl From<FrameworkError> for WorkshopError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Incomplete(part) => WorkshopError::MissingPart(part),
            other => WorkshopError::Framework(other.to_string()),
        }
    }
}
