//! Composable pieces of the helper policy.
//!
//! - **Patterns**: one named rule each (guard + body)
//! - **Strategies**: the full priority cascade built from patterns
//!
//! ```text
//! ark_helper()
//!     ├─ safety     IsUnsafe          → ReturnToArk
//!     ├─ grab       HasAnimalsHere    → GrabPreferred
//!     ├─ chase      HasAnimalsInSight → ChaseBest
//!     ├─ sweep      Always            → FollowSweep | RandomStep
//!     └─ idle       Always            → Wait
//! ```

pub mod patterns;
pub mod strategies;

use behavior_tree::{Behavior, Selector};

use crate::context::DecisionContext;

/// Boxed subtree over the decision blackboard.
pub type BehaviorTree = Box<dyn Behavior<DecisionContext>>;

/// A complete policy. The root stays a concrete [`Selector`] so callers can
/// tell which rule decided a tick.
pub type Policy = Selector<DecisionContext>;
