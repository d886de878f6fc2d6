// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Steady-State Economy Snapshot
//
// Hourly view of the zoo at the current instant. Nothing is mutated, and the
// same inputs always produce the same snapshot.
//
//   raw      = (base + attractiveness * per_point) * (0.5 + satisfaction / 100) * (1 + visitor_boost)
//   visitors = demand(raw, price)
//   income   = visitors * price * (1 + income_multiplier)
//   kiosk    = visitors * kiosk_revenue_per_visitor      (kiosk owned)
//   cost     = sum of one hour of upkeep per billed animal
//   net      = income + kiosk - cost

use crate::appeal::{self, ItemTally};
use crate::bonus;
use crate::catalog::{ItemCatalog, SpeciesCatalog};
use crate::constants::EconomyConstants;
use crate::demand;
use crate::growth;
use crate::ledger;
use crate::types::{AnimalInstance, EconomyStatusSnapshot, EvolutionProgress, ItemId};

pub fn snapshot(
    constants: &EconomyConstants,
    species: &SpeciesCatalog,
    items: &ItemCatalog,
    animals: &[AnimalInstance],
    owned_items: &[ItemId],
    ticket_price: f64,
) -> EconomyStatusSnapshot {
    let bonuses = bonus::resolve_bonuses(items, owned_items);
    let tally = ItemTally::from_owned(items, owned_items);
    let billed = ledger::billed_count(species, animals);
    let price = constants.sanitize_price(ticket_price);

    let attractiveness = appeal::attractiveness(constants, billed, &tally);
    let satisfaction = appeal::satisfaction(constants, billed, &tally);

    let raw = (constants.base_visitors_per_hour
        + attractiveness as f64 * constants.visitors_per_attraction_point)
        * (0.5 + satisfaction as f64 / 100.0)
        * bonuses.visitor_factor();
    let visitors = demand::adjusted_visitors(constants, raw, price);

    let hourly_income = visitors * price * bonuses.income_factor();
    let kiosk_revenue = if tally.has_kiosk {
        visitors * constants.kiosk_revenue_per_visitor
    } else {
        0.0
    };
    let hourly_cost: f64 = animals
        .iter()
        .filter(|a| species.contains(&a.species))
        .map(|a| ledger::upkeep(constants, a, billed, 1.0, &bonuses))
        .sum();
    let hourly_net = hourly_income + kiosk_revenue - hourly_cost;

    EconomyStatusSnapshot {
        hourly_income,
        hourly_cost,
        hourly_visitors: visitors as u64,
        hourly_net,
        kiosk_revenue,
        attractiveness,
        satisfaction,
        in_deficit: hourly_net < 0.0,
        closest_to_evolving: closest_to_evolving(constants, species, animals, bonuses.xp_bonus),
    }
}

/// The known-species baby with the most experience; the earliest wins a tie.
pub fn closest_to_evolving(
    constants: &EconomyConstants,
    species: &SpeciesCatalog,
    animals: &[AnimalInstance],
    xp_bonus: f64,
) -> Option<EvolutionProgress> {
    let (index, animal) = animals
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_baby() && species.contains(&a.species))
        .fold(None::<(usize, &AnimalInstance)>, |best, (i, a)| match best {
            Some((_, b)) if b.experience >= a.experience => best,
            _ => Some((i, a)),
        })?;

    Some(EvolutionProgress {
        index,
        species: animal.species.clone(),
        remaining_experience: constants.evolution_threshold.saturating_sub(animal.experience),
        estimated_hours: growth::hours_to_evolve(animal, constants, xp_bonus).unwrap_or(u32::MAX),
    })
}
