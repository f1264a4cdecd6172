//! Per-helper carried state: position, flock, sweep line and latest hint.
//!
//! The decision engine treats everything here as the helper's own record.
//! Nothing is shared between helpers; each one decodes its own copy of
//! Noah's broadcast.

use std::f64::consts::TAU;
use std::fmt;

use arrayvec::ArrayVec;

use crate::animal::{Animal, AnimalId};
use crate::config::ArkConfig;
use crate::error::{ArkError, ErrorSeverity};
use crate::geometry::{Direction, Heading, Position};
use crate::hint::BroadcastHint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlockError {
    #[error("flock is full ({capacity} animals)")]
    Full { capacity: usize },

    #[error("{id} is already in the flock")]
    AlreadyCarried { id: AnimalId },

    #[error("{id} is not in the flock")]
    NotCarried { id: AnimalId },
}

impl ArkError for FlockError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            Self::AlreadyCarried { .. } | Self::NotCarried { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "FLOCK_FULL",
            Self::AlreadyCarried { .. } => "FLOCK_ALREADY_CARRIED",
            Self::NotCarried { .. } => "FLOCK_NOT_CARRIED",
        }
    }
}

/// Identifier of a helper; also its index for sweep-angle assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelperId(pub u32);

impl fmt::Display for HelperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "helper#{}", self.0)
    }
}

/// Animals carried by a helper, in pick-up order.
///
/// Storage is inline and bounded by [`ArkConfig::MAX_FLOCK_CAPACITY`]; the
/// effective capacity may be lowered by configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flock {
    animals: ArrayVec<Animal, { ArkConfig::MAX_FLOCK_CAPACITY }>,
    capacity: usize,
}

impl Flock {
    /// Creates an empty flock. Capacity is clamped to the inline maximum.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            animals: ArrayVec::new(),
            capacity: capacity.min(ArkConfig::MAX_FLOCK_CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.animals.len() >= self.capacity
    }

    pub fn contains(&self, id: AnimalId) -> bool {
        self.animals.iter().any(|animal| animal.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn push(&mut self, animal: Animal) -> Result<(), FlockError> {
        if self.is_full() {
            return Err(FlockError::Full {
                capacity: self.capacity,
            });
        }
        if self.contains(animal.id) {
            return Err(FlockError::AlreadyCarried { id: animal.id });
        }
        self.animals
            .try_push(animal)
            .map_err(|_| FlockError::Full {
                capacity: self.capacity,
            })
    }

    /// Drops one animal back into the world, keeping the order of the rest.
    pub fn release(&mut self, id: AnimalId) -> Result<Animal, FlockError> {
        let index = self
            .animals
            .iter()
            .position(|animal| animal.id == id)
            .ok_or(FlockError::NotCarried { id })?;
        Ok(self.animals.remove(index))
    }

    /// Empties the flock, returning the animals in pick-up order.
    pub fn unload(&mut self) -> Vec<Animal> {
        self.animals.drain(..).collect()
    }
}

impl Default for Flock {
    fn default() -> Self {
        Self::with_capacity(ArkConfig::MAX_FLOCK_CAPACITY)
    }
}

/// Sweep line state: a fixed angle plus the current (possibly reflected)
/// heading.
///
/// Steps are eight-way, so the heading is traced Bresenham-style: the
/// dominant axis advances one cell every tick while the minor axis keeps a
/// sub-cell carry and steps whenever the carry rounds over. Over many ticks
/// the helper follows the straight line at its angle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepState {
    angle: f64,
    heading: Heading,
    carry: (f64, f64),
}

impl SweepState {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            heading: Heading::from_angle(angle),
            carry: (0.0, 0.0),
        }
    }

    /// Evenly distributed angle for helper `index` among `num_helpers`.
    pub fn for_helper(index: u32, num_helpers: u32) -> Self {
        let n = num_helpers.max(1);
        Self::new(TAU * f64::from(index % n) / f64::from(n))
    }

    /// Angle assigned at creation; never changes.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current direction of travel.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Heading rescaled so the dominant component is exactly ±1.
    fn per_tick(&self) -> (f64, f64) {
        let major = self.heading.dx.abs().max(self.heading.dy.abs());
        if major == 0.0 {
            return (1.0, 0.0);
        }
        (self.heading.dx / major, self.heading.dy / major)
    }

    fn target(&self) -> (f64, f64) {
        let (ux, uy) = self.per_tick();
        (self.carry.0 + ux, self.carry.1 + uy)
    }

    /// Step the current heading proposes, without committing to it.
    pub fn planned_step(&self) -> Option<Direction> {
        let (tx, ty) = self.target();
        Direction::from_delta(
            (tx.round() as i32).clamp(-1, 1),
            (ty.round() as i32).clamp(-1, 1),
        )
    }

    /// Records that the planned step was taken, keeping the remainder.
    pub fn advance(&mut self, step: Direction) {
        let (tx, ty) = self.target();
        let (sx, sy) = step.delta();
        self.carry = (tx - f64::from(sx), ty - f64::from(sy));
    }

    /// Bounces the heading off a vertical (`x`) and/or horizontal (`y`) wall.
    pub fn reflect(&mut self, x: bool, y: bool) {
        if x {
            self.heading = self.heading.reflect_x();
            self.carry.0 = -self.carry.0;
        }
        if y {
            self.heading = self.heading.reflect_y();
            self.carry.1 = -self.carry.1;
        }
    }

    pub fn reset_carry(&mut self) {
        self.carry = (0.0, 0.0);
    }
}

/// Everything a single helper carries from one tick to the next.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelperState {
    pub id: HelperId,
    pub position: Position,
    pub flock: Flock,
    pub sweep: SweepState,
    /// Most recent broadcast; `None` until Noah has spoken.
    pub hint: Option<BroadcastHint>,
}

impl HelperState {
    /// A fresh helper standing on the ark with an empty flock.
    pub fn new(id: HelperId, config: &ArkConfig) -> Self {
        Self {
            id,
            position: config.ark_position,
            flock: Flock::with_capacity(config.flock_capacity),
            sweep: SweepState::for_helper(id.0, config.num_helpers),
            hint: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_hint(mut self, hint: BroadcastHint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_sweep(mut self, sweep: SweepState) -> Self {
        self.sweep = sweep;
        self
    }

    /// Overwrites the held hint with a freshly received broadcast byte.
    pub fn receive_hint(&mut self, byte: u8) -> BroadcastHint {
        let hint = BroadcastHint::from_byte(byte);
        self.hint = Some(hint);
        hint
    }

    pub fn is_flock_full(&self) -> bool {
        self.flock.is_full()
    }
}
