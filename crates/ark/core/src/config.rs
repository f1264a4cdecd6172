use crate::error::{ArkError, ErrorSeverity};
use crate::geometry::{GridBounds, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} has no cells")]
    EmptyGrid { width: u32, height: u32 },

    #[error("ark position {position} lies outside the grid")]
    ArkOutOfBounds { position: Position },

    #[error("flock capacity {capacity} must be between 1 and {max}")]
    FlockCapacity { capacity: usize, max: usize },

    #[error("sight radius must be positive")]
    ZeroSightRadius,

    #[error("at least one helper is required")]
    NoHelpers,
}

impl ArkError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArkConfig {
    /// Grid extent in cells.
    pub grid: GridBounds,
    /// Home base where flocks are unloaded.
    pub ark_position: Position,
    /// Animals a helper may carry before it must head home.
    pub flock_capacity: usize,
    /// Radius (in cells) of the helper's visible area.
    pub sight_radius: u32,
    /// Number of helpers sharing the sweep angles.
    pub num_helpers: u32,
    /// Base seed for the deterministic random-step fallback.
    pub seed: u64,
}

impl ArkConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on flock size; sizes the inline flock storage.
    pub const MAX_FLOCK_CAPACITY: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: u32 = 1000;
    pub const DEFAULT_SIGHT_RADIUS: u32 = 5;
    pub const DEFAULT_NUM_HELPERS: u32 = 4;

    pub fn new() -> Self {
        let grid = GridBounds::new(Self::DEFAULT_GRID_SIZE, Self::DEFAULT_GRID_SIZE);
        Self {
            grid,
            ark_position: Position::new(grid.width as i32 / 2, grid.height as i32 / 2),
            flock_capacity: Self::MAX_FLOCK_CAPACITY,
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
            num_helpers: Self::DEFAULT_NUM_HELPERS,
            seed: 0,
        }
    }

    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid = GridBounds::new(width, height);
        self
    }

    pub fn with_ark_position(mut self, position: Position) -> Self {
        self.ark_position = position;
        self
    }

    pub fn with_num_helpers(mut self, num_helpers: u32) -> Self {
        self.num_helpers = num_helpers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.is_empty() {
            return Err(ConfigError::EmptyGrid {
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        if !self.grid.contains(self.ark_position) {
            return Err(ConfigError::ArkOutOfBounds {
                position: self.ark_position,
            });
        }
        if self.flock_capacity == 0 || self.flock_capacity > Self::MAX_FLOCK_CAPACITY {
            return Err(ConfigError::FlockCapacity {
                capacity: self.flock_capacity,
                max: Self::MAX_FLOCK_CAPACITY,
            });
        }
        if self.sight_radius == 0 {
            return Err(ConfigError::ZeroSightRadius);
        }
        if self.num_helpers == 0 {
            return Err(ConfigError::NoHelpers);
        }
        Ok(())
    }
}

impl Default for ArkConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ArkConfig::default();
        assert_eq!(config.flock_capacity, 4);
        assert_eq!(config.ark_position, Position::new(500, 500));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ArkConfig::default().with_ark_position(Position::new(-1, 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArkOutOfBounds { .. })
        ));

        let mut config = ArkConfig::default();
        config.flock_capacity = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FlockCapacity {
                capacity: 5,
                max: 4
            })
        );

        let config = ArkConfig::default().with_grid(0, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));

        let config = ArkConfig::default().with_num_helpers(0);
        assert_eq!(config.validate(), Err(ConfigError::NoHelpers));
    }
}
