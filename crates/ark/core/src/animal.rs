//! Animals, species codes and genders.

use std::fmt;

use crate::error::{ArkError, ErrorSeverity};
use crate::geometry::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeciesError {
    #[error("species code {code} exceeds maximum {max}", max = SpeciesCode::MAX)]
    OutOfRange { code: u32 },

    #[error("species label {label:?} is not a letter")]
    InvalidLabel { label: char },
}

impl ArkError for SpeciesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "SPECIES_OUT_OF_RANGE",
            Self::InvalidLabel { .. } => "SPECIES_INVALID_LABEL",
        }
    }
}

/// Seven-bit species identity (0..=127).
///
/// Species are conventionally labelled with single letters; `'a'` is code 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SpeciesCode(u8);

impl SpeciesCode {
    pub const MAX: u8 = 0x7F;

    /// Builds a species code, rejecting anything outside the seven-bit space.
    pub const fn new(code: u8) -> Result<Self, SpeciesError> {
        if code > Self::MAX {
            return Err(SpeciesError::OutOfRange { code: code as u32 });
        }
        Ok(Self(code))
    }

    /// Builds a species code from the low seven bits, discarding the rest.
    #[inline]
    pub(crate) const fn from_low_bits(byte: u8) -> Self {
        Self(byte & Self::MAX)
    }

    /// Parses a single-letter label, case-insensitively (`'a'`/`'A'` → 0).
    pub fn from_label(label: char) -> Result<Self, SpeciesError> {
        if !label.is_ascii_alphabetic() {
            return Err(SpeciesError::InvalidLabel { label });
        }
        Ok(Self(label.to_ascii_lowercase() as u8 - b'a'))
    }

    /// Letter label for codes that have one.
    pub fn label(self) -> Option<char> {
        (self.0 < 26).then(|| (b'a' + self.0) as char)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SpeciesCode {
    type Error = SpeciesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl TryFrom<u32> for SpeciesCode {
    type Error = SpeciesError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .map_err(|_| SpeciesError::OutOfRange { code })
            .and_then(Self::new)
    }
}

impl From<SpeciesCode> for u8 {
    fn from(code: SpeciesCode) -> Self {
        code.0
    }
}

impl fmt::Display for SpeciesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "species_{}", self.0),
        }
    }
}

/// Animal gender. Ordered so that `Male < Female`.
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
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub const fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Simulator-assigned identifier of a single animal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimalId(pub u32);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "animal#{}", self.0)
    }
}

/// An animal as reported by the simulator for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animal {
    pub id: AnimalId,
    pub species: SpeciesCode,
    pub gender: Gender,
    pub position: Position,
}

impl Animal {
    pub fn new(id: AnimalId, species: SpeciesCode, gender: Gender, position: Position) -> Self {
        Self {
            id,
            species,
            gender,
            position,
        }
    }

    /// Stable ordering key used whenever several animals tie.
    #[inline]
    pub fn identity_key(&self) -> (SpeciesCode, Gender, AnimalId) {
        (self.species, self.gender, self.id)
    }

    #[inline]
    pub fn is(&self, species: SpeciesCode, gender: Gender) -> bool {
        self.species == species && self.gender == gender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_code_rejects_eighth_bit() {
        assert!(SpeciesCode::new(127).is_ok());
        assert_eq!(
            SpeciesCode::new(128),
            Err(SpeciesError::OutOfRange { code: 128 })
        );
        assert_eq!(
            SpeciesCode::try_from(300u32),
            Err(SpeciesError::OutOfRange { code: 300 })
        );
    }

    #[test]
    fn labels_map_to_codes() {
        assert_eq!(SpeciesCode::from_label('a').unwrap().get(), 0);
        assert_eq!(SpeciesCode::from_label('Z').unwrap().get(), 25);
        assert!(SpeciesCode::from_label('3').is_err());

        let code = SpeciesCode::new(2).unwrap();
        assert_eq!(code.label(), Some('c'));
        assert_eq!(code.to_string(), "c");
        assert_eq!(SpeciesCode::new(90).unwrap().to_string(), "species_90");
    }

    #[test]
    fn gender_parses_and_flips() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
