//! Composite behavior nodes.
//!
//! [`Selector`] (OR logic) tries children in priority order until one
//! succeeds.

use crate::{Behavior, Status};

/// Executes child behaviors in priority order until one succeeds.
///
/// # Semantics
///
/// - Children are evaluated from first to last
/// - The first child returning `Success` wins; later children are **not evaluated**
/// - If all children return `Failure`, the selector returns `Failure`
///
/// [`Selector::select`] additionally reports *which* child won, so callers
/// can log or assert on the branch that decided a tick.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }

    /// Ticks children in order and returns the index of the first success.
    pub fn select(&self, ctx: &mut C) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.tick(ctx).is_success())
    }

    /// Name of the child at `index`.
    pub fn child_name(&self, index: usize) -> Option<&str> {
        self.children.get(index).map(|child| child.name())
    }

    /// Child names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool(self.select(ctx).is_some())
    }

    fn name(&self) -> &str {
        "selector"
    }
}
