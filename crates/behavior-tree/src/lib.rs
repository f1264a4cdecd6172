//! Lightweight behavior tree library for turn-based agents.
//!
//! Every tick completes immediately: a node either succeeds or fails, there
//! is no `Running` state and no delta time. That makes a tree a plain,
//! deterministic function of its context, which is what a per-turn decision
//! policy needs.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure (no Running state)
//! - [`Rule`]: A named guard paired with the behavior it unlocks
//! - [`Selector`]: Composite node where the first success wins
//!
//! A priority cascade is a [`Selector`] over [`Rule`]s. The selector reports
//! which rule fired, so the dominance order stays auditable.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod rule;
pub mod status;

pub use behavior::Behavior;
pub use composite::Selector;
pub use rule::Rule;
pub use status::Status;
