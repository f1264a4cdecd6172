//! Deterministic rules and data types for the Ark collection game.
//!
//! `ark-core` defines the vocabulary shared by Noah, the helpers and whatever
//! simulator hosts them: animals and species, grid geometry, the helper's
//! carried state, the per-tick perception snapshot, the action set a helper
//! may emit, and the one-byte broadcast codec. Everything here is pure; the
//! decision engine lives in `helper-ai`.
pub mod action;
pub mod animal;
pub mod config;
pub mod error;
pub mod geometry;
pub mod helper;
pub mod hint;
pub mod noah;
pub mod perception;
pub mod rng;

pub use action::HelperAction;
pub use animal::{Animal, AnimalId, Gender, SpeciesCode, SpeciesError};
pub use config::{ArkConfig, ConfigError};
pub use error::{ArkError, ErrorSeverity};
pub use geometry::{Direction, GridBounds, Heading, Position};
pub use helper::{Flock, FlockError, HelperId, HelperState, SweepState};
pub use hint::{BroadcastHint, HintError, decode, encode};
pub use noah::{ArkLedger, Census, NoahPolicy};
pub use perception::Perception;
pub use rng::{PcgRng, RngOracle, compute_seed};
