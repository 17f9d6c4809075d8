use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name, material and measurements shared by every furniture part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub material: String,
    /// Dimension name to centimetres.
    pub dimensions: BTreeMap<String, f64>,
}

impl Part {
    pub fn new(name: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: material.into(),
            dimensions: BTreeMap::new(),
        }
    }

    pub fn with_dimension(mut self, dimension: &str, cm: f64) -> Self {
        self.set_dimension(dimension, cm);
        self
    }

    pub fn set_dimension(&mut self, dimension: &str, cm: f64) {
        self.dimensions.insert(dimension.to_string(), cm);
    }
}

/// The closed set of furniture templates the catalog knows about.
///
/// A cabinet owns its components outright, so cloning a cabinet clones every drawer and door
/// inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Furniture {
    Drawer(Part),
    Door(Part),
    Cabinet { part: Part, components: Vec<Furniture> },
}

impl Furniture {
    pub fn drawer(name: impl Into<String>, material: impl Into<String>) -> Self {
        Furniture::Drawer(
            Part::new(name, material)
                .with_dimension("width", 40.0)
                .with_dimension("depth", 30.0)
                .with_dimension("height", 15.0),
        )
    }

    pub fn door(name: impl Into<String>, material: impl Into<String>) -> Self {
        Furniture::Door(
            Part::new(name, material)
                .with_dimension("width", 60.0)
                .with_dimension("height", 180.0)
                .with_dimension("thickness", 2.0),
        )
    }

    pub fn cabinet(name: impl Into<String>, material: impl Into<String>) -> Self {
        Furniture::Cabinet {
            part: Part::new(name, material)
                .with_dimension("width", 120.0)
                .with_dimension("depth", 60.0)
                .with_dimension("height", 200.0),
            components: Vec::new(),
        }
    }

    pub fn part(&self) -> &Part {
        match self {
            Furniture::Drawer(part) | Furniture::Door(part) => part,
            Furniture::Cabinet { part, .. } => part,
        }
    }

    pub fn part_mut(&mut self) -> &mut Part {
        match self {
            Furniture::Drawer(part) | Furniture::Door(part) => part,
            Furniture::Cabinet { part, .. } => part,
        }
    }

    /// Nested components; empty for anything but a cabinet.
    pub fn components(&self) -> &[Furniture] {
        match self {
            Furniture::Cabinet { components, .. } => components,
            _ => &[],
        }
    }

    /// Adds a component to a cabinet. Returns the component back if `self` can't hold one.
    pub fn add_component(&mut self, component: Furniture) -> Result<(), Furniture> {
        match self {
            Furniture::Cabinet { components, .. } => {
                components.push(component);
                Ok(())
            }
            _ => Err(component),
        }
    }
}
