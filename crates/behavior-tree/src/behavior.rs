//! Core behavior trait.
//!
//! The trait is generic over a context type `C` (the blackboard), so nodes
//! can read the situation and record what they decided.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// Nodes may write intermediate results or the chosen action into `ctx`.
    fn tick(&self, ctx: &mut C) -> Status;

    /// Label used when reporting which branch of a tree fired.
    fn name(&self) -> &str {
        "node"
    }
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}
