//! # Decorator
//!
//! A [`Decorator`] exclusively owns one inner component and presents the same interface,
//! adjusting the inner result on the way out. Stacking decorators builds a linear wrapper
//! chain: the last-wrapped layer is the outermost one and its adjustment is applied last.
//!
//! ```rust
//! use pattern_framework::{Component, Decorate, Increment, Leaf};
//!
//! let coffee = Leaf::new("coffee", 10.0)
//!     .decorate(Increment::new("milk", 2.0))
//!     .decorate(Increment::new("sugar", 1.0));
//!
//! assert_eq!(coffee.operation(), 13.0);
//! assert_eq!(coffee.name(), "sugar");
//! ```

use crate::component::{BoxedComponent, Combine, Component};
use tracing::trace;

/// The behavior a decorator inserts around its inner component.
pub trait Layer<O>: Send + Sync {
    /// Layer name; it becomes the decorator's node name.
    fn name(&self) -> &str;

    /// Adjust the inner result.
    fn apply(&self, inner: O) -> O;
}

/// A layer that combines its own fixed contribution after the inner result.
///
/// This is the common case: a surcharge added to a price, a suffix appended to a
/// description, a feature pushed onto a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Increment<O> {
    name: String,
    amount: O,
}

impl<O> Increment<O> {
    pub fn new(name: impl Into<String>, amount: O) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn amount(&self) -> &O {
        &self.amount
    }
}

impl<O: Combine + Clone + Send + Sync> Layer<O> for Increment<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, inner: O) -> O {
        inner.combine(self.amount.clone())
    }
}

/// A wrapper node holding exactly one inner component.
pub struct Decorator<C, L> {
    inner: C,
    layer: L,
}

impl<C, L> Decorator<C, L>
where
    C: Component,
    L: Layer<C::Output>,
{
    pub fn new(inner: C, layer: L) -> Self {
        Self { inner, layer }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Unwraps one layer, handing back the inner component.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, L> Component for Decorator<C, L>
where
    C: Component,
    L: Layer<C::Output>,
{
    type Output = C::Output;

    fn name(&self) -> &str {
        self.layer.name()
    }

    fn operation(&self) -> Self::Output {
        let inner = self.inner.operation();
        trace!(layer = self.layer.name(), inner = self.inner.name(), "Decorate");
        self.layer.apply(inner)
    }
}

/// Extension methods for stacking decorators fluently.
pub trait Decorate: Component + Sized {
    /// Wraps `self` in a new outermost layer.
    fn decorate<L: Layer<Self::Output>>(self, layer: L) -> Decorator<Self, L> {
        Decorator::new(self, layer)
    }

    /// Erases the concrete type so differently built stacks can share a variable.
    fn boxed(self) -> BoxedComponent<Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Component + Sized> Decorate for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Leaf;

    struct Doubling;

    impl Layer<f64> for Doubling {
        fn name(&self) -> &str {
            "double"
        }

        fn apply(&self, inner: f64) -> f64 {
            inner * 2.0
        }
    }

    #[test]
    fn milk_then_sugar_totals_thirteen() {
        let coffee = Leaf::new("coffee", 10.0)
            .decorate(Increment::new("milk", 2.0))
            .decorate(Increment::new("sugar", 1.0));
        assert_eq!(coffee.operation(), 13.0);
    }

    #[test]
    fn sugar_then_milk_also_totals_thirteen() {
        let coffee = Leaf::new("coffee", 10.0)
            .decorate(Increment::new("sugar", 1.0))
            .decorate(Increment::new("milk", 2.0));
        assert_eq!(coffee.operation(), 13.0);
    }

    #[test]
    fn descriptions_read_inner_to_outer() {
        let order = Leaf::new("coffee", String::from("coffee"))
            .decorate(Increment::new("milk", String::from(" + milk")))
            .decorate(Increment::new("sugar", String::from(" + sugar")));
        assert_eq!(order.operation(), "coffee + milk + sugar");
        assert_eq!(order.name(), "sugar");
        assert_eq!(order.inner().name(), "milk");
    }

    #[test]
    fn non_additive_layers_depend_on_order() {
        let add_then_double = Leaf::new("base", 10.0)
            .decorate(Increment::new("plus", 2.0))
            .decorate(Doubling);
        let double_then_add = Leaf::new("base", 10.0)
            .decorate(Doubling)
            .decorate(Increment::new("plus", 2.0));
        assert_eq!(add_then_double.operation(), 24.0);
        assert_eq!(double_then_add.operation(), 22.0);
    }

    #[test]
    fn boxed_stacks_share_a_type() {
        let plain: BoxedComponent<f64> = Leaf::new("coffee", 10.0).boxed();
        let fancy: BoxedComponent<f64> = Leaf::new("coffee", 10.0)
            .decorate(Increment::new("whip", 3.0))
            .boxed();
        let totals: Vec<f64> = [plain, fancy].iter().map(|c| c.operation()).collect();
        assert_eq!(totals, vec![10.0, 13.0]);
    }

    #[test]
    fn into_inner_peels_one_layer() {
        let coffee = Leaf::new("coffee", 10.0).decorate(Increment::new("milk", 2.0));
        let plain = coffee.into_inner();
        assert_eq!(plain.operation(), 10.0);
    }
}
