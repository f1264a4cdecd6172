//! Noah's side of the broadcast: deciding which species to ask for.
//!
//! Noah watches what is aboard and names the rarest species that still
//! lacks a pair. The gender bit asks for whichever gender is still missing:
//! a male aboard means a female is wanted.

use std::collections::{BTreeMap, BTreeSet};

use crate::animal::{Animal, Gender, SpeciesCode};
use crate::hint::BroadcastHint;

/// Which (species, gender) combinations are already aboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArkLedger {
    aboard: BTreeSet<(SpeciesCode, Gender)>,
}

impl ArkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, animal: &Animal) {
        self.aboard.insert((animal.species, animal.gender));
    }

    pub fn record_all<'a>(&mut self, animals: impl IntoIterator<Item = &'a Animal>) {
        for animal in animals {
            self.record(animal);
        }
    }

    pub fn has(&self, species: SpeciesCode, gender: Gender) -> bool {
        self.aboard.contains(&(species, gender))
    }

    /// Both genders of `species` are aboard.
    pub fn is_complete(&self, species: SpeciesCode) -> bool {
        Gender::ALL.iter().all(|&gender| self.has(species, gender))
    }

    pub fn len(&self) -> usize {
        self.aboard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aboard.is_empty()
    }
}

/// Population of every species in the world, known to Noah up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Census {
    populations: BTreeMap<SpeciesCode, u32>,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population(mut self, species: SpeciesCode, population: u32) -> Self {
        self.insert(species, population);
        self
    }

    pub fn insert(&mut self, species: SpeciesCode, population: u32) {
        self.populations.insert(species, population);
    }

    pub fn population(&self, species: SpeciesCode) -> Option<u32> {
        self.populations.get(&species).copied()
    }

    pub fn species(&self) -> impl Iterator<Item = SpeciesCode> + '_ {
        self.populations.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.populations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    /// Lowest-population species not yet paired on the ark.
    ///
    /// Ties go to the lower species code.
    pub fn rarest_needed(&self, ledger: &ArkLedger) -> Option<SpeciesCode> {
        self.populations
            .iter()
            .filter(|(species, _)| !ledger.is_complete(**species))
            .min_by_key(|(species, population)| (**population, **species))
            .map(|(species, _)| *species)
    }
}

impl FromIterator<(SpeciesCode, u32)> for Census {
    fn from_iter<I: IntoIterator<Item = (SpeciesCode, u32)>>(iter: I) -> Self {
        Self {
            populations: iter.into_iter().collect(),
        }
    }
}

/// Noah's broadcast policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoahPolicy {
    /// Ticks between broadcasts; 1 speaks every tick.
    pub broadcast_interval: u64,
}

impl NoahPolicy {
    pub const DEFAULT_BROADCAST_INTERVAL: u64 = 1;

    pub fn new() -> Self {
        Self {
            broadcast_interval: Self::DEFAULT_BROADCAST_INTERVAL,
        }
    }

    pub fn with_interval(broadcast_interval: u64) -> Self {
        Self {
            broadcast_interval: broadcast_interval.max(1),
        }
    }

    pub fn should_broadcast(&self, tick: u64) -> bool {
        tick % self.broadcast_interval.max(1) == 0
    }

    /// The hint Noah would send now, or `None` once every species is paired.
    pub fn target(&self, ledger: &ArkLedger, census: &Census) -> Option<BroadcastHint> {
        let species = census.rarest_needed(ledger)?;
        let gender = if ledger.has(species, Gender::Male) {
            Gender::Female
        } else {
            Gender::Male
        };
        Some(BroadcastHint::new(species, gender))
    }

    /// Wire form of [`NoahPolicy::target`].
    pub fn hint(&self, ledger: &ArkLedger, census: &Census) -> Option<u8> {
        self.target(ledger, census).map(BroadcastHint::to_byte)
    }

    /// Rate-limited broadcast for `tick`.
    pub fn broadcast(&self, tick: u64, ledger: &ArkLedger, census: &Census) -> Option<u8> {
        if !self.should_broadcast(tick) {
            return None;
        }
        self.hint(ledger, census)
    }
}

impl Default for NoahPolicy {
    fn default() -> Self {
        Self::new()
    }
}
