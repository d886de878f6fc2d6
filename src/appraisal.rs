// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Sell Price Appraisal

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::adapter;
use crate::catalog::SpeciesCatalog;
use crate::constants::EconomyConstants;
use crate::types::{AgeStage, AnimalInstance, Gender};

const BABY_FACTOR: Decimal = dec!(0.5);
const ADULT_FEMALE_FACTOR: Decimal = dec!(0.8);
const ADULT_MALE_FACTOR: Decimal = dec!(1.0);

fn stage_factor(animal: &AnimalInstance) -> Decimal {
    match (animal.age_stage, animal.gender) {
        (AgeStage::Baby, _) => BABY_FACTOR,
        (AgeStage::Adult, Some(Gender::Male)) => ADULT_MALE_FACTOR,
        (AgeStage::Adult, _) => ADULT_FEMALE_FACTOR,
    }
}

/// Liquidation price in whole coins; `None` for an unknown species.
///
/// Base value is the species' adult visitor value over `sell_hour_multiplier`
/// hours, scaled down for babies and adult females.
pub fn sell_price(
    constants: &EconomyConstants,
    species: &SpeciesCatalog,
    animal: &AnimalInstance,
) -> Option<u64> {
    let profile = species.profile_or_warn(&animal.species, "appraisal")?;
    let base = adapter::to_decimal(profile.visitors_per_hour(AgeStage::Adult))
        * Decimal::from(constants.sell_hour_multiplier);
    let price = (base * stage_factor(animal)).floor();
    Some(adapter::decimal_to_i64(price).max(0) as u64)
}
