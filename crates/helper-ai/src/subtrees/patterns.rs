//! One rule per cascade tier.
//!
//! Rule names double as [`RuleKind`](crate::RuleKind) labels in logs and
//! decisions.

use behavior_tree::builder::{rule, selector};

use crate::nodes::{
    Always, ChaseBest, FollowSweep, GrabPreferred, HasAnimalsHere, HasAnimalsInSight, IsUnsafe,
    RandomStep, ReturnToArk, Wait,
};

use super::BehaviorTree;

/// Head home when it rains or the flock is full.
///
/// The body never fails, so once the guard holds no lower rule runs.
pub fn safety_first() -> BehaviorTree {
    rule("safety", Box::new(IsUnsafe), Box::new(ReturnToArk))
}

/// Pick up an animal standing on the helper's cell.
pub fn grab_here() -> BehaviorTree {
    rule("grab", Box::new(HasAnimalsHere), Box::new(GrabPreferred))
}

/// Step toward the best animal in sight.
pub fn chase_in_sight() -> BehaviorTree {
    rule("chase", Box::new(HasAnimalsInSight), Box::new(ChaseBest))
}

/// Sweep the grid; wander randomly if the sweep is blocked.
pub fn sweep_or_wander() -> BehaviorTree {
    rule(
        "sweep",
        Box::new(Always),
        selector(vec![Box::new(FollowSweep), Box::new(RandomStep)]),
    )
}

/// Nothing else applied.
pub fn idle() -> BehaviorTree {
    rule("idle", Box::new(Always), Box::new(Wait))
}
