//! Target ranking for grabbing and chasing.
//!
//! Both rules rank animals by how well they match Noah's latest hint and
//! then by a rule-specific key. Every key ends in the animal's identity, so
//! the winner never depends on the order the simulator listed animals in.

use ark_core::{Animal, AnimalId, BroadcastHint, Gender, Position, SpeciesCode};

/// How well an animal matches the current hint. Lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Preference {
    /// Hinted species and hinted gender.
    Exact,
    /// Hinted species, other gender.
    Species,
    /// Anything else, or no hint at all.
    Any,
}

impl Preference {
    pub fn of(animal: &Animal, hint: Option<BroadcastHint>) -> Self {
        match hint {
            Some(hint) if animal.is(hint.species, hint.gender) => Preference::Exact,
            Some(hint) if animal.species == hint.species => Preference::Species,
            _ => Preference::Any,
        }
    }
}

type GrabKey = (Preference, SpeciesCode, Gender, AnimalId);
type ChaseKey = (Preference, i64, Position, SpeciesCode, Gender, AnimalId);

fn grab_key(animal: &Animal, hint: Option<BroadcastHint>) -> GrabKey {
    let (species, gender, id) = animal.identity_key();
    (Preference::of(animal, hint), species, gender, id)
}

fn chase_key(animal: &Animal, from: Position, hint: Option<BroadcastHint>) -> ChaseKey {
    let (species, gender, id) = animal.identity_key();
    (
        Preference::of(animal, hint),
        from.distance_sq(animal.position),
        animal.position,
        species,
        gender,
        id,
    )
}

/// Animal to pick up from the helper's own cell.
pub fn pick_grab<'a>(
    animals: impl IntoIterator<Item = &'a Animal>,
    hint: Option<BroadcastHint>,
) -> Option<&'a Animal> {
    animals
        .into_iter()
        .min_by_key(|animal| grab_key(animal, hint))
}

/// Animal to chase among those in sight: best preference tier first, then
/// nearest.
pub fn pick_chase<'a>(
    animals: impl IntoIterator<Item = &'a Animal>,
    from: Position,
    hint: Option<BroadcastHint>,
) -> Option<&'a Animal> {
    animals
        .into_iter()
        .min_by_key(|animal| chase_key(animal, from, hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(code: u8) -> SpeciesCode {
        SpeciesCode::new(code).unwrap()
    }

    fn animal(id: u32, code: u8, gender: Gender, x: i32, y: i32) -> Animal {
        Animal::new(AnimalId(id), species(code), gender, Position::new(x, y))
    }

    #[test]
    fn preference_tiers() {
        let hint = Some(BroadcastHint::new(species(3), Gender::Female));
        assert_eq!(Preference::of(&animal(0, 3, Gender::Female, 0, 0), hint), Preference::Exact);
        assert_eq!(Preference::of(&animal(0, 3, Gender::Male, 0, 0), hint), Preference::Species);
        assert_eq!(Preference::of(&animal(0, 4, Gender::Female, 0, 0), hint), Preference::Any);
        assert_eq!(Preference::of(&animal(0, 3, Gender::Female, 0, 0), None), Preference::Any);
    }

    #[test]
    fn grab_prefers_exact_then_species() {
        let here = [
            animal(1, 2, Gender::Male, 0, 0),
            animal(2, 5, Gender::Male, 0, 0),
            animal(3, 5, Gender::Female, 0, 0),
        ];
        let exact = Some(BroadcastHint::new(species(5), Gender::Female));
        assert_eq!(pick_grab(&here, exact).map(|a| a.id), Some(AnimalId(3)));

        let without_exact = &here[..2];
        assert_eq!(pick_grab(without_exact, exact).map(|a| a.id), Some(AnimalId(2)));
    }

    #[test]
    fn grab_is_order_independent() {
        let mut here = vec![
            animal(9, 4, Gender::Female, 0, 0),
            animal(7, 4, Gender::Male, 0, 0),
            animal(8, 1, Gender::Female, 0, 0),
        ];
        let first = pick_grab(&here, None).copied();
        here.reverse();
        assert_eq!(pick_grab(&here, None).copied(), first);
        assert_eq!(first.map(|a| a.id), Some(AnimalId(8)));
    }

    #[test]
    fn chase_takes_nearest_within_tier() {
        let origin = Position::new(0, 0);
        let visible = [
            animal(1, 2, Gender::Male, 5, 0),
            animal(2, 2, Gender::Male, 3, 0),
        ];
        let hint = Some(BroadcastHint::new(species(2), Gender::Male));
        assert_eq!(pick_chase(&visible, origin, hint).map(|a| a.id), Some(AnimalId(2)));
    }

    #[test]
    fn chase_tier_beats_distance() {
        let origin = Position::new(0, 0);
        let visible = [
            animal(1, 1, Gender::Male, 1, 0),
            animal(2, 2, Gender::Female, 4, 4),
        ];
        let hint = Some(BroadcastHint::new(species(2), Gender::Male));
        assert_eq!(pick_chase(&visible, origin, hint).map(|a| a.id), Some(AnimalId(2)));
    }

    #[test]
    fn chase_ties_break_on_position() {
        let origin = Position::new(0, 0);
        let visible = [
            animal(1, 0, Gender::Male, 0, 2),
            animal(2, 0, Gender::Male, 2, 0),
            animal(3, 0, Gender::Male, 0, -2),
        ];
        assert_eq!(pick_chase(&visible, origin, None).map(|a| a.id), Some(AnimalId(3)));
    }
}
