//! # Framework Errors
//!
//! This module defines the common error types used throughout the pattern framework.
//! Structural operations (decorating, aggregating, dispatching) are total and never
//! fail; the variants here cover the few places where an operation can be rejected:
//! a missing prototype, an unfinished build, an empty undo history, or the invoker
//! runtime going away.

/// Boxed error returned by user-supplied commands.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur within the pattern framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Invoker closed")]
    ActorClosed,
    #[error("Invoker dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Missing required part: {0}")]
    Incomplete(String),
    #[error("Entity error: {0}")]
    EntityError(BoxError),
}
