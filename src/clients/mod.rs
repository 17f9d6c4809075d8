//! Type-safe wrappers around [`InvokerClient`](pattern_framework::InvokerClient).

pub mod home_client;

pub use home_client::*;
