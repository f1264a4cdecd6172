//! Data-driven game setup and loaders.
//!
//! This crate reads the tunable parts of an Ark game from TOML files:
//! - Game configuration (grid, ark position, flock capacity, sight radius)
//! - Species census used by Noah to rank rarity
//!
//! Content is consumed by whatever hosts the helpers and never appears in
//! helper state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CensusLoader, ConfigLoader, LoadResult};
