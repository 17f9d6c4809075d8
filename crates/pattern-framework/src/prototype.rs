//! # Prototype Registry
//!
//! New objects are produced by copying a registered template instead of constructing them from
//! scratch. The copy contract is Rust's [`Clone`]: owned sub-objects (vectors, maps, nested
//! structs) are cloned along with the template, so changing a copy never shows on the original.

use crate::error::FrameworkError;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Named templates that hand out independent copies.
#[derive(Debug, Clone)]
pub struct PrototypeRegistry<T: Clone> {
    prototypes: HashMap<String, T>,
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Stores `prototype` under `name`, returning whatever was registered there before.
    pub fn register(&mut self, name: impl Into<String>, prototype: T) -> Option<T> {
        let name = name.into();
        let previous = self.prototypes.insert(name.clone(), prototype);
        info!(%name, replaced = previous.is_some(), size = self.prototypes.len(), "Registered");
        previous
    }

    /// Removes a template. Copies already handed out are unaffected.
    pub fn unregister(&mut self, name: &str) -> Option<T> {
        let removed = self.prototypes.remove(name);
        debug!(name, found = removed.is_some(), "Unregister");
        removed
    }

    /// A fresh copy of the template registered as `name`.
    pub fn spawn(&self, name: &str) -> Result<T, FrameworkError> {
        match self.prototypes.get(name) {
            Some(prototype) => {
                debug!(name, "Clone");
                Ok(prototype.clone())
            }
            None => {
                warn!(name, "Prototype not found");
                Err(FrameworkError::NotFound(name.to_string()))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
