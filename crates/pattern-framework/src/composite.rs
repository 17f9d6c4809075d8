//! # Composite
//!
//! A [`Composite`] owns an ordered list of child components and answers `operation()` by
//! folding its children's results with [`Combine`], in insertion order. Children can be leaves,
//! decorators or other composites, so arbitrarily deep trees are assembled at runtime.
//!
//! Each child is owned by exactly one parent (it is moved in), which rules out shared
//! sub-trees and back-edges: the structure is always a strict tree.
//!
//! [`walk`] and [`leaves`] traverse a tree depth-first without knowing any concrete node type.

use crate::component::{BoxedComponent, Combine, Component};
use tracing::{debug, trace};

/// A node aggregating child components.
pub struct Composite<O> {
    name: String,
    children: Vec<BoxedComponent<O>>,
}

impl<O: 'static> Composite<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child after all existing ones.
    pub fn add<C>(&mut self, child: C) -> &mut Self
    where
        C: Component<Output = O> + 'static,
    {
        debug!(parent = %self.name, child = child.name(), position = self.children.len(), "Add child");
        self.children.push(Box::new(child));
        self
    }

    /// Consuming variant of [`Composite::add`] for building trees in one expression.
    pub fn with<C>(mut self, child: C) -> Self
    where
        C: Component<Output = O> + 'static,
    {
        self.add(child);
        self
    }

    /// Removes the first direct child called `name` and hands it back.
    ///
    /// The remaining children keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<BoxedComponent<O>> {
        let position = self.children.iter().position(|c| c.name() == name)?;
        debug!(parent = %self.name, child = name, position, "Remove child");
        Some(self.children.remove(position))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<O> Component for Composite<O>
where
    O: Combine + Default + Send + Sync + 'static,
{
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn operation(&self) -> O {
        self.children.iter().fold(O::default(), |acc, child| {
            trace!(parent = %self.name, child = child.name(), "Reduce child");
            acc.combine(child.operation())
        })
    }

    fn children(&self) -> &[BoxedComponent<O>] {
        &self.children
    }

    fn is_composite(&self) -> bool {
        true
    }
}

/// Visits `root` and every node below it, depth-first and in insertion order.
///
/// `visit` receives the node depth (the root is at depth 0) and the node itself.
pub fn walk<O>(root: &dyn Component<Output = O>, visit: &mut dyn FnMut(usize, &dyn Component<Output = O>)) {
    walk_at(root, 0, visit);
}

fn walk_at<O>(
    node: &dyn Component<Output = O>,
    depth: usize,
    visit: &mut dyn FnMut(usize, &dyn Component<Output = O>),
) {
    visit(depth, node);
    for child in node.children() {
        walk_at(child.as_ref(), depth + 1, visit);
    }
}

/// Terminal nodes reachable from `root`, in traversal order. Empty composites are not leaves.
pub fn leaves<O>(root: &dyn Component<Output = O>) -> Vec<&dyn Component<Output = O>> {
    let mut found = Vec::new();
    collect_leaves(root, &mut found);
    found
}

fn collect_leaves<'a, O>(node: &'a dyn Component<Output = O>, found: &mut Vec<&'a dyn Component<Output = O>>) {
    if !node.is_composite() {
        found.push(node);
        return;
    }
    for child in node.children() {
        collect_leaves(child.as_ref(), found);
    }
}
