//! # Observability
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Every traversal in the
//! framework emits structured events, so the same output explains how a request moved through a
//! chain, which layers a decorator stack applied, or what the invoker did with a command.
//!
//! ## Levels
//!
//! - `info`: terminal outcomes (request handled, singleton constructed, command executed)
//! - `warn`: rejected outcomes (unhandled request, missing prototype, failed build or command)
//! - `debug`: each hop of a chain, each step of a director, each registry lookup
//! - `trace`: every decorator layer and composite child during `operation()`
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=pattern_framework=debug cargo run
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` a purchase approval reads:
//!
//! ```text
//! DEBUG Forward chain=purchase handler="Alice" position=0
//! INFO Handled chain=purchase handler="Bob" position=1
//! ```

/// Initializes compact, `RUST_LOG`-filtered logging. Call once, early in `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // fields already name the chain, layer or target
        .compact()
        .init();
}
