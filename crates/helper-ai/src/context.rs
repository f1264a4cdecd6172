//! Blackboard for one tick of helper decision-making.
//!
//! The [`DecisionContext`] owns everything the nodes may look at:
//!
//! - A copy of the helper's state (position, flock, hint)
//! - The perception snapshot for this tick
//! - The sweep state, the only thing a tick may change
//! - The action chosen by whichever rule fired
//!
//! Owning the data keeps the context free of lifetimes, so one policy tree
//! can be built once and ticked every turn. After the tick the caller copies
//! back [`DecisionContext::sweep`] and nothing else.

use ark_core::{
    Animal, BroadcastHint, Direction, HelperAction, HelperState, Perception, Position, SweepState,
};

use crate::steering;

pub struct DecisionContext {
    /// Read-only copy of the deciding helper.
    pub helper: HelperState,

    /// What the helper sees this tick.
    pub perception: Perception,

    /// Sweep line state, written back to the helper after the tick.
    pub sweep: SweepState,

    /// Seed for the random-step fallback.
    pub seed: u64,

    action: Option<HelperAction>,
}

impl DecisionContext {
    pub fn new(helper: HelperState, perception: Perception, seed: u64) -> Self {
        let sweep = helper.sweep;
        Self {
            helper,
            perception,
            sweep,
            seed,
            action: None,
        }
    }

    /// Records the action for this tick.
    ///
    /// Only one action node may succeed per tick. A second call indicates a
    /// malformed tree; in debug builds it panics, otherwise the first action
    /// is kept.
    pub fn set_action(&mut self, action: HelperAction) {
        debug_assert!(
            self.action.is_none(),
            "action already set for {}: {:?}, attempted {:?}",
            self.helper.id,
            self.action,
            action
        );
        if self.action.is_none() {
            self.action = Some(action);
        }
    }

    pub fn action(&self) -> Option<HelperAction> {
        self.action
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Consumes the context, returning the chosen action and the final sweep.
    pub fn finish(self) -> (Option<HelperAction>, SweepState) {
        (self.action, self.sweep)
    }

    // ========================================================================
    // Situation queries
    // ========================================================================

    #[inline]
    pub fn position(&self) -> Position {
        self.helper.position
    }

    #[inline]
    pub fn hint(&self) -> Option<BroadcastHint> {
        self.helper.hint
    }

    /// Rain or a full flock: the helper must head home.
    pub fn is_unsafe(&self) -> bool {
        self.perception.is_raining || self.helper.is_flock_full()
    }

    pub fn at_ark(&self) -> bool {
        self.helper.position == self.perception.ark_position
    }

    pub fn animals_here(&self) -> &[Animal] {
        &self.perception.animals_here
    }

    /// Visible animals that are not on the helper's own cell.
    pub fn animals_in_sight(&self) -> impl Iterator<Item = &Animal> {
        let here = self.helper.position;
        self.perception
            .animals_visible
            .iter()
            .filter(move |animal| animal.position != here)
    }

    /// A step the helper can actually take: legal and inside the grid.
    pub fn can_step(&self, direction: Direction) -> bool {
        steering::can_step(&self.perception, self.helper.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use ark_core::{AnimalId, ArkConfig, Gender, GridBounds, HelperId, SpeciesCode};

    use super::*;

    fn context(perception: Perception) -> DecisionContext {
        let config = ArkConfig::default().with_grid(10, 10).with_ark_position(Position::new(5, 5));
        let helper = HelperState::new(HelperId(0), &config).with_position(Position::new(2, 2));
        DecisionContext::new(helper, perception, 0)
    }

    #[test]
    fn own_cell_is_excluded_from_sight() {
        let species = SpeciesCode::new(0).unwrap();
        let perception = Perception::new(0, Position::new(5, 5), GridBounds::new(10, 10))
            .with_animals_visible([
                Animal::new(AnimalId(1), species, Gender::Male, Position::new(2, 2)),
                Animal::new(AnimalId(2), species, Gender::Male, Position::new(3, 2)),
            ]);
        let ctx = context(perception);
        let ids: Vec<_> = ctx.animals_in_sight().map(|a| a.id).collect();
        assert_eq!(ids, vec![AnimalId(2)]);
    }

    #[test]
    fn can_step_requires_legality_and_bounds() {
        let perception = Perception::new(0, Position::new(5, 5), GridBounds::new(3, 3))
            .with_legal_moves([Direction::North, Direction::West]);
        let ctx = context(perception);
        // (2, 3) is outside a 3x3 grid even though the move is listed.
        assert!(!ctx.can_step(Direction::North));
        assert!(ctx.can_step(Direction::West));
        assert!(!ctx.can_step(Direction::South));
    }

    #[test]
    fn first_action_wins() {
        let mut ctx = context(Perception::default());
        assert!(!ctx.has_action());
        ctx.set_action(HelperAction::NoOp);
        assert_eq!(ctx.action(), Some(HelperAction::NoOp));
    }
}
