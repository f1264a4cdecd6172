//! Per-tick snapshot a simulator hands to a helper.
//!
//! The snapshot is taken before any helper moves, so helpers never observe
//! each other's choices within a tick. The engine trusts it: consistency of
//! the world (e.g. an animal reported on an unreachable cell) is the
//! simulator's responsibility.

use crate::animal::Animal;
use crate::geometry::{Direction, GridBounds, Position};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perception {
    /// Turn number, used only to seed the random-step fallback.
    pub tick: u64,
    pub is_raining: bool,
    /// Animals on the helper's own cell (genders are known here).
    pub animals_here: Vec<Animal>,
    /// Animals within sight radius. May also list the helper's own cell.
    pub animals_visible: Vec<Animal>,
    /// Steps the simulator will accept this tick.
    pub legal_moves: Vec<Direction>,
    pub ark_position: Position,
    pub bounds: GridBounds,
}

impl Perception {
    pub fn new(tick: u64, ark_position: Position, bounds: GridBounds) -> Self {
        Self {
            tick,
            ark_position,
            bounds,
            ..Self::default()
        }
    }

    pub fn raining(mut self, is_raining: bool) -> Self {
        self.is_raining = is_raining;
        self
    }

    pub fn with_animals_here(mut self, animals: impl IntoIterator<Item = Animal>) -> Self {
        self.animals_here = animals.into_iter().collect();
        self
    }

    pub fn with_animals_visible(mut self, animals: impl IntoIterator<Item = Animal>) -> Self {
        self.animals_visible = animals.into_iter().collect();
        self
    }

    pub fn with_legal_moves(mut self, moves: impl IntoIterator<Item = Direction>) -> Self {
        self.legal_moves = moves.into_iter().collect();
        self
    }

    /// Every step that keeps `from` inside the grid, in canonical order.
    pub fn with_moves_inside_bounds(mut self, from: Position) -> Self {
        let bounds = self.bounds;
        self.legal_moves = Direction::ALL
            .into_iter()
            .filter(|&direction| bounds.contains(from.step(direction)))
            .collect();
        self
    }

    #[inline]
    pub fn is_legal(&self, direction: Direction) -> bool {
        self.legal_moves.contains(&direction)
    }

    /// Legal moves in canonical order with duplicates removed.
    pub fn sorted_legal_moves(&self) -> Vec<Direction> {
        let mut moves = self.legal_moves.clone();
        moves.sort_unstable();
        moves.dedup();
        moves
    }
}
