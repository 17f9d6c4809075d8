//! Error types for the furniture catalog.

use pattern_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No template is registered under this name.
    #[error("Prototype not registered: {0}")]
    NotRegistered(String),

    /// Components can only be added to a cabinet.
    #[error("{0} cannot hold components")]
    NotAContainer(String),

    #[error("Catalog error: {0}")]
    Framework(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(name) => CatalogError::NotRegistered(name),
            other => CatalogError::Framework(other.to_string()),
        }
    }
}
