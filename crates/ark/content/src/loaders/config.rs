//! Game configuration loader.

use std::path::Path;

use ark_core::ArkConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Omitted keys fall back to [`ArkConfig::default`]. The result is validated
/// before it is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ArkConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ArkConfig> {
        let config: ArkConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ark_core::{GridBounds, Position};

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            sight_radius = 7
            seed = 42

            [grid]
            width = 40
            height = 30

            [ark_position]
            x = 20
            y = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.grid, GridBounds::new(40, 30));
        assert_eq!(config.ark_position, Position::new(20, 15));
        assert_eq!(config.sight_radius, 7);
        assert_eq!(config.seed, 42);
        assert_eq!(config.flock_capacity, ArkConfig::MAX_FLOCK_CAPACITY);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("flock_capacity = 9").unwrap_err();
        assert!(err.to_string().contains("flock capacity"), "{err}");

        let err = ConfigLoader::parse("sight_radius = \"far\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "num_helpers = 6").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.num_helpers, 6);

        let missing = file.path().with_extension("missing");
        assert!(ConfigLoader::load(&missing).is_err());
    }
}
