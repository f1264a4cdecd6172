//! Builder utilities for ergonomic behavior tree construction.
//!
//! Shorthands for the `Box::new(Node::new(...))` boilerplate.

use crate::{Behavior, Rule, Selector};

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Shorthand for `Box::new(Rule::new(name, guard, body))`.
#[inline]
pub fn rule<C: 'static>(
    name: &'static str,
    guard: Box<dyn Behavior<C>>,
    body: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Rule::new(name, guard, body))
}
