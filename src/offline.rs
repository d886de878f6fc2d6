// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Offline Rewards Reconciliation
//
// One pass over the zoo for the (capped) time the player was away:
//   1. resolve bonuses from owned items
//   2. bill every known animal at its stage as of the start of the interval
//   3. grow babies, evolving any that reach the threshold
//   4. settle the net into the capped coin balance
//
// Billing uses the pre-call stage for the whole interval even when an animal
// evolves partway through; the interval is not split at the evolution instant.

use crate::bonus;
use crate::catalog::{ItemCatalog, SpeciesCatalog};
use crate::clock::GenderSource;
use crate::constants::EconomyConstants;
use crate::growth;
use crate::ledger::{self, EconomyLedger};
use crate::types::{EvolvedAnimal, OfflineRewardsRequest, OfflineRewardsSummary, Timestamp};

pub fn reconcile(
    constants: &EconomyConstants,
    species: &SpeciesCatalog,
    items: &ItemCatalog,
    request: &OfflineRewardsRequest,
    now: Timestamp,
    genders: &mut impl GenderSource,
) -> OfflineRewardsSummary {
    let hours = constants.clamp_offline_hours(now.hours_since(request.last_seen_at));
    let bonuses = bonus::resolve_bonuses(items, &request.owned_items);

    let mut animals = request.animals.clone();
    let mut ledger = EconomyLedger::new(
        constants,
        species,
        bonuses,
        request.ticket_price,
        hours,
        ledger::billed_count(species, &animals),
    );

    let mut evolved = Vec::new();
    let mut experience_gained: u64 = 0;

    for (index, animal) in animals.iter_mut().enumerate() {
        if ledger.record(animal).is_none() {
            continue;
        }
        let outcome = growth::grow(animal, constants, hours, bonuses.xp_bonus, now, genders);
        experience_gained += u64::from(outcome.gained);
        if outcome.evolved {
            if let Some(gender) = animal.gender {
                evolved.push(EvolvedAnimal { index, species: animal.species.clone(), gender });
            }
        }
    }

    let totals = ledger.totals();
    let coins = ledger.settle(request.coins);

    log::debug!(
        "offline: {:.2}h, {} billed, net {}, coins {} -> {}",
        hours,
        totals.billed_animals,
        totals.net_income(),
        request.coins,
        coins
    );

    OfflineRewardsSummary {
        effective_hours: hours,
        hours_away: hours.floor() as u32,
        total_visitors: totals.visitors,
        gross_income: totals.gross_income,
        total_cost: totals.total_cost,
        net_income: totals.net_income(),
        evolved,
        experience_gained,
        bonuses,
        animals,
        coins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedGender;
    use crate::types::{AnimalInstance, Gender, ItemId};

    const HOUR_MS: i64 = 3_600_000;

    fn request(animals: Vec<AnimalInstance>, coins: u64, away_hours: i64) -> (OfflineRewardsRequest, Timestamp) {
        let last_seen = Timestamp(1_700_000_000_000);
        let now = Timestamp(last_seen.0 + away_hours * HOUR_MS);
        let req = OfflineRewardsRequest {
            last_seen_at: last_seen,
            animals,
            coins,
            owned_items: Vec::new(),
            ticket_price: 10.0,
        };
        (req, now)
    }

    fn run(req: &OfflineRewardsRequest, now: Timestamp) -> OfflineRewardsSummary {
        reconcile(
            &EconomyConstants::default(),
            &SpeciesCatalog::builtin(),
            &ItemCatalog::builtin(),
            req,
            now,
            &mut FixedGender(Gender::Female),
        )
    }

    fn baby_lion(experience: u32) -> AnimalInstance {
        AnimalInstance { experience, ..AnimalInstance::newborn("lion", Timestamp(0)) }
    }

    #[test]
    fn ten_hours_away_counts_as_four() {
        let (req, now) = request(vec![baby_lion(950)], 0, 10);
        let out = run(&req, now);
        assert_eq!(out.effective_hours, 4.0);
        assert_eq!(out.hours_away, 4);
        assert_eq!(out.experience_gained, 40);
        assert_eq!(out.animals[0].experience, 990);
        assert!(out.animals[0].is_baby());
        assert!(out.evolved.is_empty());
    }

    #[test]
    fn crossing_threshold_evolves_before_return() {
        let (req, now) = request(vec![baby_lion(970)], 0, 4);
        let out = run(&req, now);
        let lion = &out.animals[0];
        assert_eq!(lion.experience, 1000);
        assert!(lion.is_adult());
        assert_eq!(lion.gender, Some(Gender::Female));
        assert_eq!(out.evolved.len(), 1);
        assert_eq!(out.evolved[0].index, 0);
    }

    #[test]
    fn evolving_animal_is_billed_as_baby() {
        let (req, now) = request(vec![baby_lion(970)], 0, 4);
        let out = run(&req, now);
        // baby lion: 5 visitors/h * 4h = 20 visitors, not the adult 48
        assert_eq!(out.total_visitors, 20);
    }

    #[test]
    fn coins_stop_at_cap() {
        let cap = EconomyConstants::default().coin_cap;
        let (req, now) = request(
            vec![AnimalInstance::adult("lion", Gender::Male, Timestamp(0))],
            cap - 5,
            4,
        );
        let out = run(&req, now);
        assert!(out.net_income.floor() > 5);
        assert_eq!(out.coins, cap);
    }

    #[test]
    fn clock_skew_credits_nothing() {
        let (mut req, now) = request(vec![baby_lion(10)], 250, 0);
        req.last_seen_at = Timestamp(now.0 + 5 * HOUR_MS);
        let out = run(&req, now);
        assert_eq!(out.effective_hours, 0.0);
        assert_eq!(out.coins, 250);
        assert_eq!(out.animals[0].experience, 10);
    }

    #[test]
    fn unknown_species_passes_through_unchanged() {
        let mystery = AnimalInstance { experience: 990, ..AnimalInstance::newborn("griffin", Timestamp(0)) };
        let (req, now) = request(vec![mystery.clone(), baby_lion(0)], 100, 4);
        let out = run(&req, now);
        assert_eq!(out.animals[0], mystery);
        assert_eq!(out.animals[1].experience, 40);
    }

    #[test]
    fn owned_upgrades_are_reported_and_applied() {
        let (mut req, now) = request(vec![baby_lion(0)], 0, 4);
        req.owned_items = vec![ItemId::from("nutrition_program")];
        let out = run(&req, now);
        assert!((out.bonuses.xp_bonus - 0.25).abs() < 1e-9);
        assert_eq!(out.animals[0].experience, 50);
    }
}
