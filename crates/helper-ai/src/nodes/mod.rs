//! Behavior tree nodes over [`DecisionContext`](crate::DecisionContext).
//!
//! - `conditions`: Read the situation and return Success/Failure
//! - `actions`: Choose the tick's [`HelperAction`](ark_core::HelperAction)

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
