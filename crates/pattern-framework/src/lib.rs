//! # Pattern Framework
//!
//! Building blocks for composing behavior out of interchangeable parts. Every node honors the
//! same capability contract, [`Component`], and a handful of wrapper shapes forward work to what
//! they own:
//!
//! - [`Decorator`]: exclusively owns one inner component and adjusts its result.
//! - [`Composite`]: owns an ordered list of children and combines their results.
//! - [`Chain`]: an ordered list of [`Handler`]s; the first that handles a request wins.
//!
//! A driver assembles a structure at runtime and only ever invokes the root. Because wrappers
//! own what they wrap, every structure is a finite tree or a linear sequence: no cycles, no
//! shared sub-trees.
//!
//! Alongside the structural shapes the crate carries the creational helpers used with them:
//! [`Singleton`] (one lazily built process-wide value), [`PrototypeRegistry`] (copy a
//! registered template) and [`Director`] with [`Build`] (step-wise construction with an explicit
//! finalize step). [`Invoker`] runs reversible [`Command`]s against a receiver object inside a
//! tokio task.
//!
//! ## Architecture Overview
//!
//! 1. **Contract** ([`Component`], [`Handler`], [`Command`]) - what a node can do
//! 2. **Shapes** ([`Decorator`], [`Composite`], [`Chain`]) - how nodes are wired together
//! 3. **Drivers** ([`walk`], [`Chain::dispatch`], [`Director::construct`], [`InvokerClient`]) -
//!    how a caller runs the structure
//!
//! ```rust
//! use pattern_framework::{Component, Composite, Decorate, Increment, Leaf};
//!
//! let menu = Composite::new("lunch")
//!     .with(Leaf::new("noodles", 28.0))
//!     .with(Leaf::new("soup", 12.0).decorate(Increment::new("extra egg", 3.0)));
//!
//! assert_eq!(menu.operation(), 43.0);
//! ```
//!
//! ## Errors
//!
//! Structural operations are total. The few operations that can be rejected (missing
//! prototype, unfinished build, empty undo history, invoker gone) return [`FrameworkError`].
//!
//! ## Testing
//!
//! The [`mock`] module provides a stand-in for the invoker so client wrappers can be tested
//! without spawning one.

pub mod builder;
pub mod chain;
pub mod command;
pub mod component;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod mock;
pub mod prototype;
pub mod singleton;
pub mod telemetry;

// Re-export core types for convenience
pub use builder::{required, Build, Director};
pub use chain::{
    handler_fn, AuditTrail, Chain, Dispatch, Disposition, FnHandler, Handler, Step, TrailAction,
    TrailEntry,
};
pub use command::{BoxedCommand, Command, Invoker, InvokerClient, InvokerRequest, Response};
pub use component::{BoxedComponent, Combine, Component, Leaf};
pub use composite::{leaves, walk, Composite};
pub use decorator::{Decorate, Decorator, Increment, Layer};
pub use error::{BoxError, FrameworkError};
pub use prototype::PrototypeRegistry;
pub use singleton::Singleton;
