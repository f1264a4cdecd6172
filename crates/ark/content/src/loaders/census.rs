//! Species census loader.
//!
//! ```toml
//! [populations]
//! a = 12      # single-letter label
//! b = 3
//! 40 = 7      # or a raw species code
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ark_core::{Census, SpeciesCode};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct CensusFile {
    populations: BTreeMap<String, u32>,
}

/// Loader for the species → population table Noah ranks rarity by.
pub struct CensusLoader;

impl CensusLoader {
    pub fn load(path: &Path) -> LoadResult<Census> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Census> {
        let file: CensusFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse census TOML: {}", e))?;

        let mut census = Census::new();
        for (key, population) in file.populations {
            let species = parse_species(&key)?;
            if census.population(species).is_some() {
                anyhow::bail!("Species {} listed more than once", species);
            }
            census.insert(species, population);
        }

        Ok(census)
    }
}

fn parse_species(key: &str) -> LoadResult<SpeciesCode> {
    let key = key.trim();
    let mut chars = key.chars();
    if let (Some(label), None) = (chars.next(), chars.next())
        && label.is_ascii_alphabetic()
    {
        return SpeciesCode::from_label(label)
            .map_err(|e| anyhow::anyhow!("Invalid species key {:?}: {}", key, e));
    }

    let code: u32 = key
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid species key {:?}", key))?;
    SpeciesCode::try_from(code).map_err(|e| anyhow::anyhow!("Invalid species key {:?}: {}", key, e))
}
