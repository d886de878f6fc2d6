// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Attractiveness and Satisfaction

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{ItemCatalog, ItemCategory};
use crate::constants::EconomyConstants;
use crate::types::ItemId;

/// Owned items tallied by catalog category. Duplicates and unknown ids are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTally {
    pub habitats: u32,
    pub decorations: u32,
    pub toys: u32,
    pub food: u32,
    pub other: u32,
    pub has_kiosk: bool,
}

impl ItemTally {
    pub fn from_owned(items: &ItemCatalog, owned: &[ItemId]) -> Self {
        let mut tally = Self::default();
        let mut seen = HashSet::with_capacity(owned.len());
        for def in owned.iter().filter(|id| seen.insert(*id)).filter_map(|id| items.get(id)) {
            match def.category {
                ItemCategory::Habitat => tally.habitats += 1,
                ItemCategory::Decoration => tally.decorations += 1,
                ItemCategory::Toy => tally.toys += 1,
                ItemCategory::Food => tally.food += 1,
                ItemCategory::Other => tally.other += 1,
            }
            tally.has_kiosk |= def.opens_kiosk;
        }
        tally
    }
}

/// Open-ended appeal score.
pub fn attractiveness(constants: &EconomyConstants, animal_count: u32, tally: &ItemTally) -> u32 {
    animal_count.saturating_mul(constants.attractiveness_per_animal)
        .saturating_add(tally.habitats.saturating_mul(constants.attractiveness_per_habitat))
        .saturating_add(tally.decorations.saturating_mul(constants.attractiveness_per_decoration))
        .saturating_add(tally.toys.saturating_mul(constants.attractiveness_per_toy))
}

/// Visitor happiness on a 0-100 scale.
pub fn satisfaction(constants: &EconomyConstants, animal_count: u32, tally: &ItemTally) -> u32 {
    let from_animals = animal_count
        .saturating_mul(constants.satisfaction_per_animal)
        .min(constants.animal_satisfaction_cap);
    let from_food = tally.food.saturating_mul(constants.satisfaction_per_food);
    let from_kiosk = if tally.has_kiosk { constants.kiosk_satisfaction_boost } else { 0 };
    constants.base_satisfaction
        .saturating_add(from_animals)
        .saturating_add(from_food)
        .saturating_add(from_kiosk)
        .min(100)
}
