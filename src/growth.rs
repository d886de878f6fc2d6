// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Growth and Evolution

use serde::{Deserialize, Serialize};

use crate::clock::GenderSource;
use crate::constants::EconomyConstants;
use crate::types::{AgeStage, AnimalInstance, EconomyBonusVector, Timestamp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthOutcome {
    /// Raw experience earned this pass, before the threshold cap.
    pub gained: u32,
    pub evolved: bool,
}

fn xp_per_hour(constants: &EconomyConstants, xp_bonus: f64) -> f64 {
    let bonus = EconomyBonusVector { xp_bonus, ..Default::default() };
    constants.base_xp_per_hour * bonus.xp_factor()
}

/// Experience earned over `hours` with the given xp bonus.
pub fn experience_for(constants: &EconomyConstants, hours: f64, xp_bonus: f64) -> u32 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    let raw = (hours * xp_per_hour(constants, xp_bonus)).floor();
    if raw >= u32::MAX as f64 { u32::MAX } else { raw as u32 }
}

/// Advance one animal by `hours`. Adults pass through untouched.
///
/// A baby whose experience reaches the threshold becomes an adult before this
/// returns and receives a gender from `genders` if it has none.
pub fn grow(
    animal: &mut AnimalInstance,
    constants: &EconomyConstants,
    hours: f64,
    xp_bonus: f64,
    now: Timestamp,
    genders: &mut impl GenderSource,
) -> GrowthOutcome {
    if animal.is_adult() {
        return GrowthOutcome::default();
    }

    let gained = experience_for(constants, hours, xp_bonus);
    let threshold = constants.evolution_threshold;
    animal.experience = animal.experience.saturating_add(gained).min(threshold);
    animal.last_growth_update_at = now;

    if animal.experience < threshold {
        return GrowthOutcome { gained, evolved: false };
    }

    animal.age_stage = AgeStage::Adult;
    if animal.gender.is_none() {
        animal.gender = Some(genders.next_gender());
    }
    GrowthOutcome { gained, evolved: true }
}

/// Hours of growth still needed, rounded up. `None` for adults or when growth is stalled.
pub fn hours_to_evolve(animal: &AnimalInstance, constants: &EconomyConstants, xp_bonus: f64) -> Option<u32> {
    if animal.is_adult() {
        return None;
    }
    let remaining = constants.evolution_threshold.saturating_sub(animal.experience);
    let per_hour = xp_per_hour(constants, xp_bonus);
    if per_hour <= 0.0 {
        return None;
    }
    Some((remaining as f64 / per_hour).ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedGender;
    use crate::types::Gender;

    fn baby_lion(experience: u32) -> AnimalInstance {
        AnimalInstance { experience, ..AnimalInstance::newborn("lion", Timestamp(0)) }
    }

    #[test]
    fn baby_below_threshold_stays_baby() {
        let c = EconomyConstants::default();
        let mut lion = baby_lion(950);
        let out = grow(&mut lion, &c, 4.0, 0.0, Timestamp(1), &mut FixedGender(Gender::Male));
        assert_eq!(out, GrowthOutcome { gained: 40, evolved: false });
        assert_eq!(lion.experience, 990);
        assert!(lion.is_baby());
        assert_eq!(lion.gender, None);
        assert_eq!(lion.last_growth_update_at, Timestamp(1));
    }

    #[test]
    fn reaching_threshold_evolves_and_assigns_gender() {
        let c = EconomyConstants::default();
        let mut lion = baby_lion(970);
        let out = grow(&mut lion, &c, 4.0, 0.0, Timestamp(1), &mut FixedGender(Gender::Female));
        assert_eq!(out, GrowthOutcome { gained: 40, evolved: true });
        assert_eq!(lion.experience, 1000);
        assert!(lion.is_adult());
        assert_eq!(lion.gender, Some(Gender::Female));
    }

    #[test]
    fn legacy_gender_is_kept_on_evolution() {
        let c = EconomyConstants::default();
        let mut lion = AnimalInstance { gender: Some(Gender::Male), ..baby_lion(999) };
        grow(&mut lion, &c, 1.0, 0.0, Timestamp(1), &mut FixedGender(Gender::Female));
        assert_eq!(lion.gender, Some(Gender::Male));
    }

    #[test]
    fn adults_are_untouched() {
        let c = EconomyConstants::default();
        let mut lion = AnimalInstance::adult("lion", Gender::Male, Timestamp(0));
        let before = lion.clone();
        let out = grow(&mut lion, &c, 4.0, 0.5, Timestamp(99), &mut FixedGender(Gender::Female));
        assert_eq!(out, GrowthOutcome::default());
        assert_eq!(lion, before);
    }

    #[test]
    fn xp_bonus_speeds_growth() {
        let c = EconomyConstants::default();
        assert_eq!(experience_for(&c, 4.0, 0.25), 50);
        assert_eq!(experience_for(&c, 4.0, -2.0), 0);
        assert_eq!(experience_for(&c, -1.0, 0.0), 0);
    }

    #[test]
    fn stale_over_threshold_baby_evolves_with_zero_hours() {
        let c = EconomyConstants::default();
        let mut lion = baby_lion(1200);
        let out = grow(&mut lion, &c, 0.0, 0.0, Timestamp(1), &mut FixedGender(Gender::Male));
        assert!(out.evolved);
        assert_eq!(lion.experience, 1000);
        assert!(lion.is_adult());
    }

    #[test]
    fn hours_to_evolve_rounds_up() {
        let c = EconomyConstants::default();
        assert_eq!(hours_to_evolve(&baby_lion(995), &c, 0.0), Some(1));
        assert_eq!(hours_to_evolve(&baby_lion(0), &c, 0.0), Some(100));
        assert_eq!(hours_to_evolve(&baby_lion(0), &c, 1.0), Some(50));
        let adult = AnimalInstance::adult("lion", Gender::Male, Timestamp(0));
        assert_eq!(hours_to_evolve(&adult, &c, 0.0), None);
    }
}
