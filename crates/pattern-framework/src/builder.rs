//! # Builder and Director
//!
//! A builder accumulates parts through mutating steps and hands over an immutable product in a
//! single finalize call, [`Build::finish`]. Mandatory parts that were never supplied make
//! `finish` fail with [`FrameworkError::Incomplete`] instead of producing a half-built value.
//!
//! A [`Director`] is a reusable recipe: an ordered list of named steps that works with any
//! builder of the right type.

use crate::error::FrameworkError;
use std::fmt;
use tracing::{debug, info, warn};

/// The finalize half of a builder.
pub trait Build {
    type Product;

    /// Consumes the builder and returns the finished product.
    fn finish(self) -> Result<Self::Product, FrameworkError>;
}

/// Checks a mandatory part collected by a builder.
///
/// Convenience for `finish` implementations: `let cpu = required(self.cpu, "cpu")?;`
pub fn required<T>(part: Option<T>, name: &str) -> Result<T, FrameworkError> {
    part.ok_or_else(|| FrameworkError::Incomplete(name.to_string()))
}

struct Step<B> {
    name: String,
    apply: Box<dyn Fn(&mut B) + Send + Sync>,
}

/// An ordered, named construction recipe.
pub struct Director<B> {
    name: String,
    steps: Vec<Step<B>>,
}

impl<B> Director<B> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step; steps run in the order they were added.
    pub fn step<F>(mut self, name: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&mut B) + Send + Sync + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            apply: Box::new(apply),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Runs every step against `builder` without finishing it.
    pub fn apply(&self, builder: &mut B) {
        for step in &self.steps {
            debug!(director = %self.name, step = %step.name, "Apply step");
            (step.apply)(builder);
        }
    }
}

impl<B: Build> Director<B> {
    /// Runs every step against `builder`, then finishes it.
    pub fn construct(&self, mut builder: B) -> Result<B::Product, FrameworkError> {
        self.apply(&mut builder);
        match builder.finish() {
            Ok(product) => {
                info!(director = %self.name, steps = self.steps.len(), "Constructed");
                Ok(product)
            }
            Err(e) => {
                warn!(director = %self.name, error = %e, "Construction failed");
                Err(e)
            }
        }
    }
}

impl<B> fmt::Debug for Director<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("name", &self.name)
            .field("steps", &self.steps())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Sandwich {
        bread: String,
        fillings: Vec<String>,
    }

    #[derive(Default)]
    struct SandwichBuilder {
        bread: Option<String>,
        fillings: Vec<String>,
    }

    impl SandwichBuilder {
        fn bread(&mut self, kind: &str) -> &mut Self {
            self.bread = Some(kind.to_string());
            self
        }

        fn filling(&mut self, item: &str) -> &mut Self {
            self.fillings.push(item.to_string());
            self
        }
    }

    impl Build for SandwichBuilder {
        type Product = Sandwich;

        fn finish(self) -> Result<Sandwich, FrameworkError> {
            Ok(Sandwich {
                bread: required(self.bread, "bread")?,
                fillings: self.fillings,
            })
        }
    }

    fn club() -> Director<SandwichBuilder> {
        Director::new("club")
            .step("bread", |b: &mut SandwichBuilder| {
                b.bread("toast");
            })
            .step("fillings", |b: &mut SandwichBuilder| {
                b.filling("ham").filling("lettuce");
            })
    }

    #[test]
    fn director_runs_steps_in_order() {
        let sandwich = club().construct(SandwichBuilder::default()).unwrap();
        assert_eq!(sandwich.bread, "toast");
        assert_eq!(sandwich.fillings, vec!["ham", "lettuce"]);
        assert_eq!(club().steps(), vec!["bread", "fillings"]);
    }

    #[test]
    fn missing_part_is_incomplete() {
        let director = Director::new("no bread").step("fillings", |b: &mut SandwichBuilder| {
            b.filling("cheese");
        });
        let result = director.construct(SandwichBuilder::default());
        assert!(matches!(result, Err(FrameworkError::Incomplete(part)) if part == "bread"));
    }

    #[test]
    fn same_director_drives_independent_builders() {
        let director = club();
        let first = director.construct(SandwichBuilder::default()).unwrap();
        let second = director.construct(SandwichBuilder::default()).unwrap();
        assert_eq!(first, second);
    }
}
