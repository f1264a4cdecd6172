//! Actions a helper hands back to the simulator.

use std::fmt;

use crate::animal::Animal;
use crate::geometry::{Direction, Position};

/// The single action a helper takes in a tick.
///
/// Movement variants already carry the concrete step, chosen from the
/// tick's legal moves, so the simulator can apply them without re-planning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HelperAction {
    /// Take the animal from the helper's own cell into its flock.
    PickUp(Animal),
    /// One step along the direct line toward `target`.
    MoveToward { target: Position, step: Direction },
    /// One step along the sweep line.
    MoveAlong(Direction),
    /// A step drawn from the legal moves when the sweep is blocked.
    MoveRandom(Direction),
    /// Stay put this tick.
    NoOp,
}

impl HelperAction {
    /// The step this action takes, if it moves.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            HelperAction::MoveToward { step, .. } => Some(step),
            HelperAction::MoveAlong(step) | HelperAction::MoveRandom(step) => Some(step),
            HelperAction::PickUp(_) | HelperAction::NoOp => None,
        }
    }

    pub fn is_move(&self) -> bool {
        self.direction().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HelperAction::PickUp(_) => "pick_up",
            HelperAction::MoveToward { .. } => "move_toward",
            HelperAction::MoveAlong(_) => "move_along",
            HelperAction::MoveRandom(_) => "move_random",
            HelperAction::NoOp => "no_op",
        }
    }
}

impl fmt::Display for HelperAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperAction::PickUp(animal) => {
                write!(f, "pick_up({} {} {})", animal.id, animal.species, animal.gender)
            }
            HelperAction::MoveToward { target, step } => {
                write!(f, "move_toward({target} via {step})")
            }
            HelperAction::MoveAlong(step) => write!(f, "move_along({step})"),
            HelperAction::MoveRandom(step) => write!(f, "move_random({step})"),
            HelperAction::NoOp => f.write_str("no_op"),
        }
    }
}
