//! # Furniture Catalog
//!
//! A prototype skin. Standard pieces are registered once; every order starts from a copy of a
//! registered piece and is customized from there without touching the template.
//!
//! ```rust
//! use pattern_recipe::catalog::FurnitureCatalog;
//!
//! let catalog = FurnitureCatalog::standard();
//! let mut custom = catalog.clone_of("cabinet").unwrap();
//! custom.part_mut().material = "rosewood".to_string();
//!
//! assert_eq!(catalog.clone_of("cabinet").unwrap().part().material, "solid wood");
//! ```

pub mod error;

pub use error::*;

use crate::model::Furniture;
use pattern_framework::PrototypeRegistry;
use tracing::{debug, instrument};

pub struct FurnitureCatalog {
    registry: PrototypeRegistry<Furniture>,
}

impl FurnitureCatalog {
    pub fn new() -> Self {
        Self {
            registry: PrototypeRegistry::new(),
        }
    }

    /// Drawer, door, and a cabinet fitted with one of each.
    pub fn standard() -> Self {
        let drawer = Furniture::drawer("Standard Drawer", "solid wood");
        let door = Furniture::door("Standard Door", "solid wood");
        let cabinet = Furniture::Cabinet {
            part: Furniture::cabinet("Standard Cabinet", "solid wood").part().clone(),
            components: vec![drawer.clone(), door.clone()],
        };

        let mut catalog = Self::new();
        catalog.register("drawer", drawer);
        catalog.register("door", door);
        catalog.register("cabinet", cabinet);
        catalog
    }

    /// Registers a template, returning the one it replaced.
    pub fn register(&mut self, name: &str, piece: Furniture) -> Option<Furniture> {
        self.registry.register(name, piece)
    }

    /// An independent copy of the template registered as `name`.
    #[instrument(skip(self))]
    pub fn clone_of(&self, name: &str) -> Result<Furniture, CatalogError> {
        Ok(self.registry.spawn(name)?)
    }

    /// A copy of `name` with a copy of `component` fitted into it.
    pub fn fitted(&self, name: &str, component: &str) -> Result<Furniture, CatalogError> {
        let mut piece = self.clone_of(name)?;
        let extra = self.clone_of(component)?;
        debug!(piece = name, component, "Fit component");
        piece
            .add_component(extra)
            .map_err(|_| CatalogError::NotAContainer(piece.part().name.clone()))?;
        Ok(piece)
    }

    pub fn names(&self) -> Vec<&str> {
        self.registry.names()
    }
}

impl Default for FurnitureCatalog {
    fn default() -> Self {
        Self::new()
    }
}
