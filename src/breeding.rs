// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Breeding
//
// Once per cadence window every species with adults of both genders produces
// min(females, males) babies. A single open gate yields one generation no
// matter how many windows have elapsed since the previous check.

use crate::catalog::SpeciesCatalog;
use crate::constants::EconomyConstants;
use crate::stats::count_by_species;
use crate::types::{AnimalInstance, BreedingOutcome, SpeciesPairs, Timestamp};

/// Whether enough time has passed since the last breeding check.
///
/// A zoo that has never been checked is always eligible. A last check in the
/// future (clock skew) keeps the gate closed.
pub fn gate_open(constants: &EconomyConstants, last_check: Option<Timestamp>, now: Timestamp) -> bool {
    match last_check {
        None => true,
        Some(last) => {
            let hours = now.hours_since(last);
            hours.is_finite() && hours >= constants.breeding_interval_hours
        }
    }
}

pub fn breed(
    constants: &EconomyConstants,
    species: &SpeciesCatalog,
    animals: &[AnimalInstance],
    last_check: Option<Timestamp>,
    now: Timestamp,
) -> BreedingOutcome {
    if !gate_open(constants, last_check, now) {
        log::debug!("breeding: gate closed (last check {:?})", last_check);
        return BreedingOutcome::gate_closed();
    }

    let mut new_babies = Vec::new();
    let mut per_species_pairs = Vec::new();
    for stats in count_by_species(species, animals) {
        let pairs = stats.adult_females.min(stats.adult_males);
        if pairs == 0 {
            continue;
        }
        new_babies.extend((0..pairs).map(|_| AnimalInstance::newborn(stats.species.clone(), now)));
        per_species_pairs.push(SpeciesPairs { species: stats.species, pairs });
    }

    BreedingOutcome { new_babies, per_species_pairs, checked_at: Some(now) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, SpeciesId};

    const DAY_MS: i64 = 24 * 3_600_000;

    fn adults(species: &str, females: usize, males: usize) -> Vec<AnimalInstance> {
        let mut v = Vec::new();
        v.extend((0..females).map(|_| AnimalInstance::adult(species, Gender::Female, Timestamp(0))));
        v.extend((0..males).map(|_| AnimalInstance::adult(species, Gender::Male, Timestamp(0))));
        v
    }

    #[test]
    fn three_females_one_male_make_one_baby() {
        let c = EconomyConstants::default();
        let s = SpeciesCatalog::builtin();
        let out = breed(&c, &s, &adults("lion", 3, 1), None, Timestamp(DAY_MS));
        assert_eq!(out.new_babies.len(), 1);
        assert_eq!(
            out.per_species_pairs,
            vec![SpeciesPairs { species: SpeciesId::from("lion"), pairs: 1 }]
        );
        let baby = &out.new_babies[0];
        assert!(baby.is_baby());
        assert_eq!(baby.experience, 0);
        assert_eq!(baby.gender, None);
        assert_eq!(baby.acquired_at, Timestamp(DAY_MS));
        assert_eq!(out.checked_at, Some(Timestamp(DAY_MS)));
    }

    #[test]
    fn gate_closed_before_interval() {
        let c = EconomyConstants::default();
        let s = SpeciesCatalog::builtin();
        let out = breed(&c, &s, &adults("lion", 2, 2), Some(Timestamp(0)), Timestamp(DAY_MS - 1));
        assert!(out.new_babies.is_empty());
        assert!(out.per_species_pairs.is_empty());
        assert_eq!(out.checked_at, None);
    }

    #[test]
    fn many_elapsed_windows_still_yield_one_generation() {
        let c = EconomyConstants::default();
        let s = SpeciesCatalog::builtin();
        let out = breed(&c, &s, &adults("zebra", 2, 2), Some(Timestamp(0)), Timestamp(10 * DAY_MS));
        assert_eq!(out.new_babies.len(), 2);
    }

    #[test]
    fn babies_and_single_gender_groups_do_not_breed() {
        let c = EconomyConstants::default();
        let s = SpeciesCatalog::builtin();
        let mut zoo = adults("panda", 4, 0);
        zoo.push(AnimalInstance {
            gender: Some(Gender::Male),
            ..AnimalInstance::newborn("panda", Timestamp(0))
        });
        let out = breed(&c, &s, &zoo, None, Timestamp(DAY_MS));
        assert!(out.new_babies.is_empty());
        assert_eq!(out.checked_at, Some(Timestamp(DAY_MS)));
    }

    #[test]
    fn species_are_paired_independently() {
        let c = EconomyConstants::default();
        let s = SpeciesCatalog::builtin();
        let mut zoo = adults("lion", 1, 0);
        zoo.extend(adults("tiger", 0, 1));
        zoo.extend(adults("penguin", 2, 3));
        zoo.extend(adults("dragon", 5, 5));
        let out = breed(&c, &s, &zoo, None, Timestamp(DAY_MS));
        assert_eq!(out.new_babies.len(), 2);
        assert!(out.new_babies.iter().all(|b| b.species == SpeciesId::from("penguin")));
    }

    #[test]
    fn future_last_check_keeps_gate_closed() {
        let c = EconomyConstants::default();
        assert!(!gate_open(&c, Some(Timestamp(5 * DAY_MS)), Timestamp(DAY_MS)));
        assert!(gate_open(&c, Some(Timestamp(0)), Timestamp(DAY_MS)));
    }
}
