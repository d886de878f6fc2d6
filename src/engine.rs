// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Engine Facade

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

use crate::appraisal;
use crate::breeding;
use crate::catalog::{ItemCatalog, SpeciesCatalog};
use crate::clock::{Clock, GenderSource, RngGenderSource};
use crate::constants::EconomyConstants;
use crate::error::EngineResult;
use crate::offline;
use crate::stats;
use crate::status;
use crate::types::*;

// ─── ZooEconomy struct ───────────────────────────────────────────────────────

/// Owns the tuning table, the catalogs and the default coin flip for evolution.
///
/// Every computation is a pure function of its arguments plus this
/// configuration; the only state that advances between calls is the seeded
/// gender source used by [`ZooEconomy::compute_offline_rewards_at`].
#[wasm_bindgen]
pub struct ZooEconomy {
    pub(crate) constants: EconomyConstants,
    pub(crate) species: SpeciesCatalog,
    pub(crate) items: ItemCatalog,
    pub(crate) genders: RngGenderSource<ChaCha8Rng>,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl ZooEconomy {
    /// Shipped tuning and catalogs, gender flips seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            constants: EconomyConstants::default(),
            species: SpeciesCatalog::builtin(),
            items: ItemCatalog::builtin(),
            genders: RngGenderSource::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn with_constants(seed: u64, constants: EconomyConstants) -> EngineResult<Self> {
        constants.validate()?;
        Ok(Self { constants, ..Self::new(seed) })
    }

    pub fn with_catalogs(
        seed: u64,
        constants: EconomyConstants,
        species: SpeciesCatalog,
        items: ItemCatalog,
    ) -> EngineResult<Self> {
        constants.validate()?;
        if species.is_empty() {
            log::warn!("engine: species catalog is empty; every animal will be skipped");
        }
        Ok(Self { constants, species, items, ..Self::new(seed) })
    }

    pub fn constants(&self) -> &EconomyConstants {
        &self.constants
    }

    pub fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn compute_offline_rewards(
        &self,
        request: &OfflineRewardsRequest,
        clock: &impl Clock,
        genders: &mut impl GenderSource,
    ) -> OfflineRewardsSummary {
        offline::reconcile(
            &self.constants,
            &self.species,
            &self.items,
            request,
            clock.now(),
            genders,
        )
    }

    /// Offline rewards using the engine's own seeded coin flip.
    pub fn compute_offline_rewards_at(
        &mut self,
        request: &OfflineRewardsRequest,
        now: Timestamp,
    ) -> OfflineRewardsSummary {
        offline::reconcile(
            &self.constants,
            &self.species,
            &self.items,
            request,
            now,
            &mut self.genders,
        )
    }

    pub fn compute_breeding(
        &self,
        animals: &[AnimalInstance],
        last_check: Option<Timestamp>,
        clock: &impl Clock,
    ) -> BreedingOutcome {
        breeding::breed(&self.constants, &self.species, animals, last_check, clock.now())
    }

    pub fn compute_economy_status(
        &self,
        animals: &[AnimalInstance],
        owned_items: &[ItemId],
        ticket_price: f64,
    ) -> EconomyStatusSnapshot {
        status::snapshot(
            &self.constants,
            &self.species,
            &self.items,
            animals,
            owned_items,
            ticket_price,
        )
    }

    pub fn compute_animal_stats(&self, animals: &[AnimalInstance]) -> Vec<SpeciesBreedingStats> {
        stats::count_by_species(&self.species, animals)
    }

    /// `None` for a species missing from the catalog.
    pub fn compute_sell_price(&self, animal: &AnimalInstance) -> Option<u64> {
        appraisal::sell_price(&self.constants, &self.species, animal)
    }
}
