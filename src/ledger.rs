// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Offline Income/Cost Ledger
//
// Per billed animal over `hours`:
//
//   visitors = floor(value(species, stage) * hours * (1 + visitor_boost) / demand(price))
//   income   = visitors * price * (1 + income_multiplier)
//   cost     = rate(stage, gender) * (1 + billed * cost_growth) * hours * (1 - cost_reduction)
//
// Totals accumulate in Decimal; only the final net is floored into the balance.

use serde::{Deserialize, Serialize};

use crate::adapter;
use crate::catalog::SpeciesCatalog;
use crate::constants::EconomyConstants;
use crate::demand;
use crate::types::{AnimalInstance, Coins, EconomyBonusVector};

/// Income and upkeep attributed to a single animal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerLine {
    pub visitors: u64,
    pub income: Coins,
    pub cost: Coins,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub visitors: u64,
    pub gross_income: Coins,
    pub total_cost: Coins,
    pub billed_animals: u32,
}

impl LedgerTotals {
    pub fn net_income(&self) -> Coins {
        self.gross_income - self.total_cost
    }
}

/// Accumulates ledger lines for one reconciliation interval.
#[derive(Debug, Clone)]
pub struct EconomyLedger<'a> {
    constants: &'a EconomyConstants,
    species: &'a SpeciesCatalog,
    bonuses: EconomyBonusVector,
    ticket_price: f64,
    hours: f64,
    billed_animals: u32,
    totals: LedgerTotals,
}

impl<'a> EconomyLedger<'a> {
    /// `billed_animals` is the zoo size used for upkeep growth (known species only).
    pub fn new(
        constants: &'a EconomyConstants,
        species: &'a SpeciesCatalog,
        bonuses: EconomyBonusVector,
        ticket_price: f64,
        hours: f64,
        billed_animals: u32,
    ) -> Self {
        Self {
            constants,
            species,
            bonuses,
            ticket_price: constants.sanitize_price(ticket_price),
            hours: if hours.is_finite() { hours.max(0.0) } else { 0.0 },
            billed_animals,
            totals: LedgerTotals::default(),
        }
    }

    /// Price one animal without recording it. `None` for an unknown species.
    pub fn line_for(&self, animal: &AnimalInstance) -> Option<LedgerLine> {
        let profile = self.species.profile_or_warn(&animal.species, "ledger")?;

        let base_visitors = profile.visitors_per_hour(animal.age_stage) * self.hours;
        let boosted = base_visitors * self.bonuses.visitor_factor();
        let visitors = demand::adjusted_visitors(self.constants, boosted, self.ticket_price);
        let income = visitors * self.ticket_price * self.bonuses.income_factor();

        let cost = upkeep(
            self.constants,
            animal,
            self.billed_animals,
            self.hours,
            &self.bonuses,
        );

        Some(LedgerLine {
            visitors: visitors as u64,
            income: adapter::coins(income),
            cost: adapter::coins(cost),
        })
    }

    /// Price and record one animal. Unknown species are skipped.
    pub fn record(&mut self, animal: &AnimalInstance) -> Option<LedgerLine> {
        let line = self.line_for(animal)?;
        self.totals.visitors = self.totals.visitors.saturating_add(line.visitors);
        self.totals.gross_income = self.totals.gross_income + line.income;
        self.totals.total_cost = self.totals.total_cost + line.cost;
        self.totals.billed_animals += 1;
        Some(line)
    }

    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    /// `clamp(current + floor(net), 0, coin_cap)`.
    pub fn settle(&self, current_coins: u64) -> u64 {
        let current = current_coins.min(i64::MAX as u64) as i64;
        let next = current.saturating_add(self.totals.net_income().floor());
        self.constants.clamp_coins(next)
    }
}

/// Upkeep for one animal over `hours`, shared with the hourly snapshot.
pub fn upkeep(
    constants: &EconomyConstants,
    animal: &AnimalInstance,
    billed_animals: u32,
    hours: f64,
    bonuses: &EconomyBonusVector,
) -> f64 {
    let base = constants.maintenance_rate(animal.age_stage, animal.gender);
    let crowding = 1.0 + billed_animals as f64 * constants.per_animal_cost_growth;
    base * crowding * hours * bonuses.cost_factor()
}

/// Animals whose species the catalog knows; the zoo size used for upkeep growth.
pub fn billed_count(species: &SpeciesCatalog, animals: &[AnimalInstance]) -> u32 {
    animals.iter().filter(|a| species.contains(&a.species)).count() as u32
}
