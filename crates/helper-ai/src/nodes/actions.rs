//! Action nodes for the helper cascade.
//!
//! Each node either records exactly one [`HelperAction`] in the context and
//! returns Success, or records nothing and returns Failure so the parent can
//! try its next alternative.

use ark_core::{HelperAction, PcgRng, RngOracle};
use behavior_tree::{Behavior, Status};
use tracing::trace;

use crate::context::DecisionContext;
use crate::selection::{pick_chase, pick_grab};
use crate::steering::{self, SweepStep};

/// Heads for the ark by the most direct open step.
///
/// Never fails: standing on the ark, or having no open step, yields
/// [`HelperAction::NoOp`]. This keeps the safety rule from falling through
/// to grabbing or chasing.
pub struct ReturnToArk;

impl Behavior<DecisionContext> for ReturnToArk {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let ark = ctx.perception.ark_position;
        let action = match steering::step_toward(&ctx.perception, ctx.position(), ark) {
            Some(step) => HelperAction::MoveToward { target: ark, step },
            None => HelperAction::NoOp,
        };
        trace!(helper = %ctx.helper.id, %action, at_ark = ctx.at_ark(), "returning to ark");
        ctx.set_action(action);
        Status::Success
    }

    fn name(&self) -> &str {
        "return_to_ark"
    }
}

/// Picks up the best-ranked animal on the helper's cell.
pub struct GrabPreferred;

impl Behavior<DecisionContext> for GrabPreferred {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let Some(animal) = pick_grab(ctx.animals_here(), ctx.hint()).copied() else {
            return Status::Failure;
        };
        ctx.set_action(HelperAction::PickUp(animal));
        Status::Success
    }

    fn name(&self) -> &str {
        "grab_preferred"
    }
}

/// Steps toward the best-ranked animal in sight.
///
/// With a target but no open step the helper waits rather than wandering.
pub struct ChaseBest;

impl Behavior<DecisionContext> for ChaseBest {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let from = ctx.position();
        let Some(target) = pick_chase(ctx.animals_in_sight(), from, ctx.hint()).copied() else {
            return Status::Failure;
        };

        let action = match steering::step_toward(&ctx.perception, from, target.position) {
            Some(step) => HelperAction::MoveToward {
                target: target.position,
                step,
            },
            None => HelperAction::NoOp,
        };
        trace!(helper = %ctx.helper.id, animal = %target.id, %action, "chasing");
        ctx.set_action(action);
        Status::Success
    }

    fn name(&self) -> &str {
        "chase_best"
    }
}

/// Follows the sweep line, bouncing off walls and obstacles.
///
/// Fails when even the reflected step is blocked. The reflection is kept.
pub struct FollowSweep;

impl Behavior<DecisionContext> for FollowSweep {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let from = ctx.position();
        let outcome = steering::follow_sweep(&mut ctx.sweep, &ctx.perception, from);
        if let SweepStep::Bounced(step) = outcome {
            trace!(helper = %ctx.helper.id, %step, "sweep bounced");
        }
        match outcome.direction() {
            Some(step) => {
                ctx.set_action(HelperAction::MoveAlong(step));
                Status::Success
            }
            None => Status::Failure,
        }
    }

    fn name(&self) -> &str {
        "follow_sweep"
    }
}

/// Takes a seeded random legal step. Fails when there is none.
///
/// In-grid moves are preferred; if the simulator lists only moves that look
/// off-grid they are trusted as given. The sweep carry is cleared since the
/// helper left its line.
pub struct RandomStep;

impl Behavior<DecisionContext> for RandomStep {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let legal = ctx.perception.sorted_legal_moves();
        let inside: Vec<_> = legal
            .iter()
            .copied()
            .filter(|&direction| ctx.can_step(direction))
            .collect();
        let moves = if inside.is_empty() { legal } else { inside };

        let Some(&step) = PcgRng.choose(ctx.seed, &moves) else {
            return Status::Failure;
        };
        ctx.sweep.reset_carry();
        ctx.set_action(HelperAction::MoveRandom(step));
        Status::Success
    }

    fn name(&self) -> &str {
        "random_step"
    }
}

/// Stays put. Always succeeds.
pub struct Wait;

impl Behavior<DecisionContext> for Wait {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.set_action(HelperAction::NoOp);
        Status::Success
    }

    fn name(&self) -> &str {
        "wait"
    }
}

#[cfg(test)]
mod tests {
    use ark_core::{
        Animal, AnimalId, ArkConfig, Direction, Gender, GridBounds, HelperId, HelperState,
        Perception, Position, SpeciesCode,
    };

    use super::*;

    const ARK: Position = Position::new(10, 10);

    fn helper_at(x: i32, y: i32) -> HelperState {
        let config = ArkConfig::default().with_grid(20, 20).with_ark_position(ARK);
        HelperState::new(HelperId(0), &config).with_position(Position::new(x, y))
    }

    fn open_field(from: Position) -> Perception {
        Perception::new(0, ARK, GridBounds::new(20, 20)).with_moves_inside_bounds(from)
    }

    fn animal(id: u32, x: i32, y: i32) -> Animal {
        Animal::new(AnimalId(id), SpeciesCode::new(2).unwrap(), Gender::Female, Position::new(x, y))
    }

    #[test]
    fn return_to_ark_steps_home() {
        let helper = helper_at(4, 10);
        let perception = open_field(helper.position);
        let mut ctx = DecisionContext::new(helper, perception, 0);
        assert_eq!(ReturnToArk.tick(&mut ctx), Status::Success);
        assert_eq!(
            ctx.action(),
            Some(HelperAction::MoveToward {
                target: ARK,
                step: Direction::East
            })
        );
    }

    #[test]
    fn return_to_ark_waits_on_the_ark() {
        let helper = helper_at(10, 10);
        let perception = open_field(helper.position);
        let mut ctx = DecisionContext::new(helper, perception, 0);
        assert_eq!(ReturnToArk.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.action(), Some(HelperAction::NoOp));
    }

    #[test]
    fn chase_waits_when_boxed_in() {
        let helper = helper_at(4, 4);
        let perception = Perception::new(0, ARK, GridBounds::new(20, 20))
            .with_animals_visible([animal(1, 6, 6)]);
        let mut ctx = DecisionContext::new(helper, perception, 0);
        assert_eq!(ChaseBest.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.action(), Some(HelperAction::NoOp));
    }

    #[test]
    fn random_step_is_seeded() {
        let helper = helper_at(4, 4);
        let perception = open_field(helper.position);
        let draw = |seed| {
            let mut ctx = DecisionContext::new(helper.clone(), perception.clone(), seed);
            assert_eq!(RandomStep.tick(&mut ctx), Status::Success);
            ctx.action()
        };
        assert_eq!(draw(42), draw(42));
        assert!(matches!(draw(7), Some(HelperAction::MoveRandom(_))));
    }

    #[test]
    fn random_step_fails_without_moves() {
        let helper = helper_at(4, 4);
        let perception = Perception::new(0, ARK, GridBounds::new(20, 20));
        let mut ctx = DecisionContext::new(helper, perception, 0);
        assert_eq!(RandomStep.tick(&mut ctx), Status::Failure);
        assert!(!ctx.has_action());
    }
}
