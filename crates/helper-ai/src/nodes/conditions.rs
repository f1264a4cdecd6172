//! Condition nodes for the helper cascade.
//!
//! Conditions never record an action.

use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Raining, or the flock has no room left.
pub struct IsUnsafe;

impl Behavior<DecisionContext> for IsUnsafe {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        Status::from_bool(ctx.is_unsafe())
    }

    fn name(&self) -> &str {
        "is_unsafe"
    }
}

/// At least one animal shares the helper's cell.
pub struct HasAnimalsHere;

impl Behavior<DecisionContext> for HasAnimalsHere {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        Status::from_bool(!ctx.animals_here().is_empty())
    }

    fn name(&self) -> &str {
        "has_animals_here"
    }
}

/// At least one animal is visible on another cell.
pub struct HasAnimalsInSight;

impl Behavior<DecisionContext> for HasAnimalsInSight {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        Status::from_bool(ctx.animals_in_sight().next().is_some())
    }

    fn name(&self) -> &str {
        "has_animals_in_sight"
    }
}

/// Always succeeds. Guard for fallback rules.
pub struct Always;

impl Behavior<DecisionContext> for Always {
    fn tick(&self, _ctx: &mut DecisionContext) -> Status {
        Status::Success
    }

    fn name(&self) -> &str {
        "always"
    }
}
