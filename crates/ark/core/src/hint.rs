//! One-byte broadcast hint exchanged between Noah and the helpers.
//!
//! Wire layout:
//!
//! ```text
//!   bit 7      bits 6..0
//! ┌────────┬──────────────┐
//! │ gender │ species code │
//! └────────┴──────────────┘
//!  1 = Female wanted, 0 = Male wanted
//! ```
//!
//! Noah sets the gender bit when the ark already holds a male of the species,
//! i.e. the bit names the gender still missing. Every byte decodes; only
//! encoding can fail.

use crate::animal::{Gender, SpeciesCode};
use crate::error::{ArkError, ErrorSeverity};

const GENDER_BIT: u8 = 0x80;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HintError {
    #[error("species code {code} does not fit in 7 bits")]
    SpeciesOutOfRange { code: u32 },
}

impl ArkError for HintError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpeciesOutOfRange { .. } => "HINT_SPECIES_OUT_OF_RANGE",
        }
    }
}

/// Decoded broadcast: the species Noah wants next and the gender to prefer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BroadcastHint {
    pub species: SpeciesCode,
    pub gender: Gender,
}

impl BroadcastHint {
    pub fn new(species: SpeciesCode, gender: Gender) -> Self {
        Self { species, gender }
    }

    /// Wire form of this hint. Infallible since the species is already valid.
    pub fn to_byte(self) -> u8 {
        let flag = match self.gender {
            Gender::Female => GENDER_BIT,
            Gender::Male => 0,
        };
        flag | self.species.get()
    }

    pub fn from_byte(byte: u8) -> Self {
        let (species, gender) = decode(byte);
        Self { species, gender }
    }
}

impl From<u8> for BroadcastHint {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<BroadcastHint> for u8 {
    fn from(hint: BroadcastHint) -> Self {
        hint.to_byte()
    }
}

/// Encodes Noah's request.
///
/// `ark_has_male_of_species` set means a female is still wanted, so bit 7 is
/// raised; otherwise a male is wanted and bit 7 stays clear.
pub fn encode(species_code: u32, ark_has_male_of_species: bool) -> Result<u8, HintError> {
    let species = SpeciesCode::try_from(species_code)
        .map_err(|_| HintError::SpeciesOutOfRange { code: species_code })?;
    let gender = if ark_has_male_of_species {
        Gender::Female
    } else {
        Gender::Male
    };
    Ok(BroadcastHint::new(species, gender).to_byte())
}

/// Decodes any byte into `(species, preferred gender)`.
pub fn decode(byte: u8) -> (SpeciesCode, Gender) {
    let species = SpeciesCode::from_low_bits(byte);
    let gender = if byte & GENDER_BIT != 0 {
        Gender::Female
    } else {
        Gender::Male
    };
    (species, gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_sets_gender_bit_when_male_aboard() {
        assert_eq!(encode(5, true), Ok(0x85));
        assert_eq!(encode(5, false), Ok(0x05));
        assert_eq!(encode(127, true), Ok(0xFF));
        assert_eq!(encode(0, false), Ok(0x00));
    }

    #[test]
    fn encode_rejects_wide_species() {
        assert_eq!(
            encode(128, false),
            Err(HintError::SpeciesOutOfRange { code: 128 })
        );
        assert_eq!(
            encode(1000, true),
            Err(HintError::SpeciesOutOfRange { code: 1000 })
        );
    }

    #[test]
    fn decode_splits_flag_and_species() {
        let (species, gender) = decode(0x83);
        assert_eq!(species.get(), 3);
        assert_eq!(gender, Gender::Female);

        let (species, gender) = decode(0x7F);
        assert_eq!(species.get(), 127);
        assert_eq!(gender, Gender::Male);
    }

    #[test]
    fn decode_is_total() {
        for byte in 0..=u8::MAX {
            let hint = BroadcastHint::from_byte(byte);
            assert!(hint.species.get() <= SpeciesCode::MAX);
            assert_eq!(hint.to_byte(), byte);
        }
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(code in 0u32..=127, male_aboard in any::<bool>()) {
            let byte = encode(code, male_aboard).unwrap();
            let (species, gender) = decode(byte);
            prop_assert_eq!(u32::from(species.get()), code);
            let expected = if male_aboard { Gender::Female } else { Gender::Male };
            prop_assert_eq!(gender, expected);
        }
    }
}
