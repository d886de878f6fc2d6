// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Per-Species Breeding Stats

use std::collections::BTreeMap;

use crate::catalog::SpeciesCatalog;
use crate::types::{AgeStage, AnimalInstance, Gender, SpeciesBreedingStats, SpeciesId};

/// Count animals per species by stage and gender, sorted by species id.
///
/// Counting is strictly by age stage: a gender left on a baby record by old
/// data is ignored. Adults without a gender are not counted toward either sex.
pub fn count_by_species(
    species: &SpeciesCatalog,
    animals: &[AnimalInstance],
) -> Vec<SpeciesBreedingStats> {
    let mut by_species: BTreeMap<&SpeciesId, SpeciesBreedingStats> = BTreeMap::new();

    for animal in animals {
        if species.profile_or_warn(&animal.species, "stats").is_none() {
            continue;
        }
        let entry = by_species
            .entry(&animal.species)
            .or_insert_with(|| SpeciesBreedingStats {
                species: animal.species.clone(),
                babies: 0,
                adult_females: 0,
                adult_males: 0,
                can_breed: false,
            });
        match (animal.age_stage, animal.gender) {
            (AgeStage::Baby, _) => entry.babies += 1,
            (AgeStage::Adult, Some(Gender::Female)) => entry.adult_females += 1,
            (AgeStage::Adult, Some(Gender::Male)) => entry.adult_males += 1,
            (AgeStage::Adult, None) => {}
        }
    }

    by_species
        .into_values()
        .map(|mut s| {
            s.can_breed = s.adult_females > 0 && s.adult_males > 0;
            s
        })
        .collect()
}
