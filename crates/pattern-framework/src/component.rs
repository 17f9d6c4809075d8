//! # Component Trait
//!
//! The `Component` trait is the capability contract every node of a tree or chain honors.
//! Leaves answer from their own fields, wrappers ([`Decorator`](crate::Decorator),
//! [`Composite`](crate::Composite)) answer by delegating to what they own. Because every node
//! speaks the same interface, a driver can build a structure at runtime and invoke only the
//! root.
//!
//! # Combining results
//! Wrappers merge values through [`Combine`]: numbers add, strings concatenate, vectors append.
//! Domain types implement `Combine` themselves when they carry several fields.

/// A boxed component, used wherever the concrete node type is only known at runtime.
pub type BoxedComponent<O> = Box<dyn Component<Output = O>>;

/// The capability contract shared by leaves and wrappers.
///
/// # Architecture Note
/// `Output` is an associated type so a tree can only contain nodes that agree on what
/// `operation()` produces. A price tree (`Output = f64`) can't accidentally receive a node that
/// produces feature lists.
///
/// Operations are total: there is no error path. Inputs are owned by the nodes themselves.
pub trait Component: Send + Sync {
    /// The value produced by [`Component::operation`].
    type Output;

    /// Human readable node name, used for traversal and logging.
    fn name(&self) -> &str;

    /// The node's contribution, including everything it wraps or contains.
    fn operation(&self) -> Self::Output;

    /// Owned child nodes, in insertion order. Leaves and decorators have none.
    fn children(&self) -> &[BoxedComponent<Self::Output>] {
        &[]
    }

    /// Whether the node is a container, even an empty one.
    fn is_composite(&self) -> bool {
        false
    }

    /// Extra text shown under the node in listings.
    fn detail(&self) -> Option<&str> {
        None
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    type Output = C::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn operation(&self) -> Self::Output {
        (**self).operation()
    }

    fn children(&self) -> &[BoxedComponent<Self::Output>] {
        (**self).children()
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }

    fn detail(&self) -> Option<&str> {
        (**self).detail()
    }
}

/// How a wrapper merges its own contribution with the wrapped one.
///
/// `a.combine(b)` keeps `a` first: for strings and vectors the result reads `a` then `b`.
pub trait Combine {
    fn combine(self, other: Self) -> Self;
}

macro_rules! additive_combine {
    ($($ty:ty),*) => {
        $(
            impl Combine for $ty {
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

additive_combine!(f32, f64, i32, i64, u32, u64, usize);

impl Combine for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Combine for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<A: Combine, B: Combine> Combine for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Combine, B: Combine, C: Combine> Combine for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

/// A terminal node holding a plain value.
///
/// `operation()` hands back a copy of the value; the leaf itself never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<O> {
    name: String,
    value: O,
}

impl<O> Leaf<O> {
    pub fn new(name: impl Into<String>, value: O) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn value(&self) -> &O {
        &self.value
    }
}

impl<O: Clone + Send + Sync> Component for Leaf<O> {
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn operation(&self) -> O {
        self.value.clone()
    }
}
