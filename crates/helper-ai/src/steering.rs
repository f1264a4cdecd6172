//! Step selection: heading for a target and following the sweep line.

use ark_core::{Direction, Perception, Position, SweepState};

/// `direction` is listed as legal and lands inside the grid.
#[inline]
pub fn can_step(perception: &Perception, from: Position, direction: Direction) -> bool {
    perception.is_legal(direction) && perception.bounds.contains(from.step(direction))
}

/// One step from `from` toward `target`.
///
/// Takes the direct eight-way step when it is legal. Otherwise takes the
/// legal step that ends closest to `target`, ties going to the earlier
/// direction in canonical order. `None` when no step is possible or the
/// helper already stands on `target`.
pub fn step_toward(perception: &Perception, from: Position, target: Position) -> Option<Direction> {
    let direct = from.direction_to(target)?;
    if can_step(perception, from, direct) {
        return Some(direct);
    }

    perception
        .sorted_legal_moves()
        .into_iter()
        .filter(|&direction| can_step(perception, from, direction))
        .min_by_key(|&direction| (from.step(direction).distance_sq(target), direction))
}

/// Which axes to mirror when `blocked` cannot be taken from `from`.
///
/// Leaving the grid flips the axis that left it. An obstacle inside the grid
/// flips the axis whose single-axis step is also blocked; if that does not
/// single one out, both axes flip.
pub fn bounce_axes(perception: &Perception, from: Position, blocked: Direction) -> (bool, bool) {
    let landing = from.step(blocked);
    let off_x = !perception.bounds.contains_x(landing.x);
    let off_y = !perception.bounds.contains_y(landing.y);
    if off_x || off_y {
        return (off_x, off_y);
    }

    let stuck = |part: Option<Direction>| part.is_some_and(|d| !can_step(perception, from, d));
    match (stuck(blocked.x_part()), stuck(blocked.y_part())) {
        (false, false) | (true, true) => (true, true),
        axes => axes,
    }
}

/// Outcome of one attempt to follow the sweep line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepStep {
    /// The planned step is open.
    Clear(Direction),
    /// The planned step was blocked; the heading was reflected and the new
    /// step is open.
    Bounced(Direction),
    /// Blocked even after reflecting.
    Blocked,
}

impl SweepStep {
    pub fn direction(self) -> Option<Direction> {
        match self {
            SweepStep::Clear(direction) | SweepStep::Bounced(direction) => Some(direction),
            SweepStep::Blocked => None,
        }
    }
}

/// Advances `sweep` by one step from `from`, bouncing at most once.
///
/// A bounce is kept in `sweep` even when the reflected step is blocked too,
/// so the helper keeps the new heading once it is free again.
pub fn follow_sweep(sweep: &mut SweepState, perception: &Perception, from: Position) -> SweepStep {
    let Some(planned) = sweep.planned_step() else {
        return SweepStep::Blocked;
    };
    if can_step(perception, from, planned) {
        sweep.advance(planned);
        return SweepStep::Clear(planned);
    }

    let (x, y) = bounce_axes(perception, from, planned);
    sweep.reflect(x, y);

    match sweep.planned_step() {
        Some(step) if can_step(perception, from, step) => {
            sweep.advance(step);
            SweepStep::Bounced(step)
        }
        _ => SweepStep::Blocked,
    }
}
