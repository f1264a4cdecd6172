//! Content loaders for reading game data from files.

pub mod census;
pub mod config;

pub use census::CensusLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn data(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn bundled_content_loads() {
        let config = ConfigLoader::load(&data("ark.toml")).unwrap();
        assert_eq!(config, ark_core::ArkConfig::default());

        let census = CensusLoader::load(&data("census.toml")).unwrap();
        assert_eq!(census.len(), 5);
        let ledger = ark_core::ArkLedger::new();
        assert_eq!(
            census.rarest_needed(&ledger),
            Some(ark_core::SpeciesCode::from_label('e').unwrap())
        );
    }
}
