//! Grid geometry: cells, bounds, eight-way steps and sweep headings.

use std::fmt;

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by taking one step in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Exact squared Euclidean distance; used for all comparisons.
    #[inline]
    pub fn distance_sq(self, other: Position) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Position) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// The eight-way step that points most directly at `target`, if any.
    pub fn direction_to(self, target: Position) -> Option<Direction> {
        Direction::from_delta((target.x - self.x).signum(), (target.y - self.y).signum())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular grid extent; valid cells are `0..width` × `0..height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub width: u32,
    pub height: u32,
}

impl GridBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains_x(&self, x: i32) -> bool {
        x >= 0 && (x as i64) < i64::from(self.width)
    }

    #[inline]
    pub fn contains_y(&self, y: i32) -> bool {
        y >= 0 && (y as i64) < i64::from(self.height)
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.contains_x(position.x) && self.contains_y(position.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Eight-way grid step.
///
/// `y` grows northward. The declaration order is the canonical order used to
/// break ties between equally good moves.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Inverse of [`Direction::delta`]. Components must be in `-1..=1`;
    /// `(0, 0)` has no direction.
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthEast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Horizontal component alone, if the step has one.
    pub const fn x_part(self) -> Option<Self> {
        Self::from_delta(self.delta().0, 0)
    }

    /// Vertical component alone, if the step has one.
    pub const fn y_part(self) -> Option<Self> {
        Self::from_delta(0, self.delta().1)
    }
}

/// Continuous unit heading used by the sweep pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub dx: f64,
    pub dy: f64,
}

impl Heading {
    /// Heading at `angle` radians, counter-clockwise from east.
    pub fn from_angle(angle: f64) -> Self {
        let (dy, dx) = angle.sin_cos();
        Self { dx, dy }
    }

    /// Mirror against a vertical wall.
    #[must_use]
    pub fn reflect_x(self) -> Self {
        Self {
            dx: -self.dx,
            dy: self.dy,
        }
    }

    /// Mirror against a horizontal wall.
    #[must_use]
    pub fn reflect_y(self) -> Self {
        Self {
            dx: self.dx,
            dy: -self.dy,
        }
    }

    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }
}
