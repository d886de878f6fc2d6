// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Type Definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Species identifier from the species catalog (e.g. `"lion"`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub String);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SpeciesId {
    fn from(s: String) -> Self { SpeciesId(s) }
}

impl From<&str> for SpeciesId {
    fn from(s: &str) -> Self { SpeciesId(s.to_string()) }
}

/// Shop item identifier (habitats, decorations, upgrades, ...).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self { ItemId(s.to_string()) }
}

// ─── Timestamp ───────────────────────────────────────────────────────────────

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Wall-clock instant in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Signed hours from `earlier` to `self`. Negative if `earlier` is in the future.
    pub fn hours_since(&self, earlier: Timestamp) -> f64 {
        (self.0 as f64 - earlier.0 as f64) / MILLIS_PER_HOUR
    }

    /// Shift by `hours`, saturating at the i64 range. NaN shifts by nothing.
    pub fn plus_hours(&self, hours: f64) -> Self {
        Self(self.0.saturating_add((hours * MILLIS_PER_HOUR) as i64))
    }
}

// ─── Coins ───────────────────────────────────────────────────────────────────

/// Fractional coin amount backed by `rust_decimal::Decimal`.
///
/// Ledger totals accumulate in this type; balances are whole coins (`u64`).
/// Addition and subtraction saturate at the Decimal range instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coins(pub Decimal);

impl Coins {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Whole coins, rounded toward negative infinity.
    pub fn floor(&self) -> i64 {
        crate::adapter::decimal_to_i64(self.0.floor())
    }
}

impl Add for Coins {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(if rhs.0.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }))
    }
}

impl Sub for Coins {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_sub(rhs.0).unwrap_or(if rhs.0.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }))
    }
}

impl std::iter::Sum for Coins {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Coins::zero(), |acc, c| acc + c)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} coins", self.0.round_dp(2))
    }
}

// ─── Age Stage / Gender ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeStage {
    Baby,
    Adult,
}

impl Default for AgeStage {
    fn default() -> Self { AgeStage::Baby }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

// ─── AnimalInstance ──────────────────────────────────────────────────────────

/// One owned creature.
///
/// Only adults carry a gender; it is assigned once, at evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalInstance {
    pub species: SpeciesId,
    #[serde(default)]
    pub age_stage: AgeStage,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub experience: u32,
    pub acquired_at: Timestamp,
    pub last_growth_update_at: Timestamp,
}

impl AnimalInstance {
    /// A freshly unlocked or freshly bred baby.
    pub fn newborn(species: impl Into<SpeciesId>, at: Timestamp) -> Self {
        Self {
            species: species.into(),
            age_stage: AgeStage::Baby,
            gender: None,
            experience: 0,
            acquired_at: at,
            last_growth_update_at: at,
        }
    }

    pub fn adult(species: impl Into<SpeciesId>, gender: Gender, at: Timestamp) -> Self {
        Self {
            species: species.into(),
            age_stage: AgeStage::Adult,
            gender: Some(gender),
            experience: 0,
            acquired_at: at,
            last_growth_update_at: at,
        }
    }

    pub fn is_baby(&self) -> bool {
        self.age_stage == AgeStage::Baby
    }

    pub fn is_adult(&self) -> bool {
        self.age_stage == AgeStage::Adult
    }
}

// ─── EconomyBonusVector ──────────────────────────────────────────────────────

/// Aggregated upgrade effects as signed fractions (0.10 = +10%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyBonusVector {
    #[serde(default)]
    pub visitor_boost: f64,
    #[serde(default)]
    pub cost_reduction: f64,
    #[serde(default)]
    pub income_multiplier: f64,
    #[serde(default)]
    pub xp_bonus: f64,
}

impl EconomyBonusVector {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn visitor_factor(&self) -> f64 {
        non_negative_factor(1.0 + self.visitor_boost)
    }

    pub fn cost_factor(&self) -> f64 {
        non_negative_factor(1.0 - self.cost_reduction)
    }

    pub fn income_factor(&self) -> f64 {
        non_negative_factor(1.0 + self.income_multiplier)
    }

    pub fn xp_factor(&self) -> f64 {
        non_negative_factor(1.0 + self.xp_bonus)
    }
}

impl Add for EconomyBonusVector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            visitor_boost: self.visitor_boost + rhs.visitor_boost,
            cost_reduction: self.cost_reduction + rhs.cost_reduction,
            income_multiplier: self.income_multiplier + rhs.income_multiplier,
            xp_bonus: self.xp_bonus + rhs.xp_bonus,
        }
    }
}

fn non_negative_factor(f: f64) -> f64 {
    if f.is_finite() { f.max(0.0) } else { 1.0 }
}

// ─── OfflineRewardsRequest / Summary ─────────────────────────────────────────

/// Everything a session-resume handler knows about the player's zoo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineRewardsRequest {
    pub last_seen_at: Timestamp,
    pub animals: Vec<AnimalInstance>,
    pub coins: u64,
    #[serde(default)]
    pub owned_items: Vec<ItemId>,
    pub ticket_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolvedAnimal {
    /// Position in the returned animal list.
    pub index: usize,
    pub species: SpeciesId,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineRewardsSummary {
    /// Capped elapsed time actually reconciled.
    pub effective_hours: f64,
    /// `effective_hours` truncated for display.
    pub hours_away: u32,
    pub total_visitors: u64,
    pub gross_income: Coins,
    pub total_cost: Coins,
    pub net_income: Coins,
    pub evolved: Vec<EvolvedAnimal>,
    pub experience_gained: u64,
    pub bonuses: EconomyBonusVector,
    pub animals: Vec<AnimalInstance>,
    pub coins: u64,
}

impl OfflineRewardsSummary {
    /// One-line recap for the welcome-back screen.
    pub fn headline(&self) -> String {
        if self.effective_hours <= 0.0 {
            return "Welcome back! Your zoo is just as you left it.".to_string();
        }
        let net = self.net_income.floor();
        let money = if net >= 0 {
            format!("earned {} coins", net)
        } else {
            format!("spent {} coins on upkeep", -net)
        };
        let mut line = format!(
            "While you were away for {}h, {} visitors came and you {}.",
            self.hours_away, self.total_visitors, money
        );
        match self.evolved.len() {
            0 => {}
            1 => {
                let grown = &self.evolved[0];
                line.push_str(&format!(" Your {} grew up and is a {}!", grown.species, grown.gender.label()));
            }
            n => line.push_str(&format!(" {} animals grew up!", n)),
        }
        line
    }
}

// ─── EconomyStatusSnapshot ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionProgress {
    pub index: usize,
    pub species: SpeciesId,
    pub remaining_experience: u32,
    pub estimated_hours: u32,
}

/// Steady-state hourly view of the zoo at the current instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyStatusSnapshot {
    pub hourly_income: f64,
    pub hourly_cost: f64,
    pub hourly_visitors: u64,
    pub hourly_net: f64,
    pub kiosk_revenue: f64,
    pub attractiveness: u32,
    pub satisfaction: u32,
    pub in_deficit: bool,
    pub closest_to_evolving: Option<EvolutionProgress>,
}

// ─── Breeding / Stats ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesPairs {
    pub species: SpeciesId,
    pub pairs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedingOutcome {
    pub new_babies: Vec<AnimalInstance>,
    pub per_species_pairs: Vec<SpeciesPairs>,
    /// Instant to persist as the new last-check time; `None` when the gate was closed.
    pub checked_at: Option<Timestamp>,
}

impl BreedingOutcome {
    pub fn gate_closed() -> Self {
        Self { new_babies: Vec::new(), per_species_pairs: Vec::new(), checked_at: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesBreedingStats {
    pub species: SpeciesId,
    pub babies: u32,
    pub adult_females: u32,
    pub adult_males: u32,
    pub can_breed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ========== Timestamp ==========

    #[test]
    fn plus_hours_moves_forward_and_back() {
        let t = Timestamp(10 * 3_600_000);
        assert_eq!(t.plus_hours(2.0), Timestamp(12 * 3_600_000));
        assert_eq!(t.plus_hours(-10.0), Timestamp(0));
    }

    #[test]
    fn plus_hours_saturates_instead_of_overflowing() {
        assert_eq!(Timestamp(i64::MAX - 1).plus_hours(1e12), Timestamp(i64::MAX));
        assert_eq!(Timestamp(i64::MIN + 1).plus_hours(-1e12), Timestamp(i64::MIN));
        assert_eq!(Timestamp(5).plus_hours(f64::NAN), Timestamp(5));
    }

    // ========== Coins ==========

    #[test]
    fn coins_add_saturates_at_decimal_max() {
        let huge = Coins(Decimal::MAX);
        assert_eq!(huge + Coins(dec!(1)), Coins(Decimal::MAX));
        assert_eq!(huge + huge, Coins(Decimal::MAX));
        assert_eq!(Coins(Decimal::MIN) + Coins(dec!(-1)), Coins(Decimal::MIN));
    }

    #[test]
    fn coins_sub_saturates_at_decimal_min() {
        assert_eq!(Coins(Decimal::MIN) - Coins(dec!(1)), Coins(Decimal::MIN));
        assert_eq!(Coins(Decimal::MAX) - Coins(dec!(-1)), Coins(Decimal::MAX));
        assert_eq!(Coins(dec!(5)) - Coins(dec!(7.5)), Coins(dec!(-2.5)));
    }

    #[test]
    fn summing_many_huge_lines_does_not_panic() {
        let total: Coins = std::iter::repeat(Coins(Decimal::MAX / dec!(2))).take(6).sum();
        assert_eq!(total, Coins(Decimal::MAX));
    }

    // ========== Headline ==========

    #[test]
    fn single_evolution_headline_names_gender() {
        let summary = OfflineRewardsSummary {
            effective_hours: 2.0,
            hours_away: 2,
            total_visitors: 30,
            gross_income: Coins(dec!(300)),
            total_cost: Coins(dec!(100)),
            net_income: Coins(dec!(200)),
            evolved: vec![EvolvedAnimal { index: 0, species: "zebra".into(), gender: Gender::Male }],
            experience_gained: 20,
            bonuses: EconomyBonusVector::none(),
            animals: Vec::new(),
            coins: 200,
        };
        let line = summary.headline();
        assert!(line.contains("earned 200 coins"));
        assert!(line.ends_with("Your zebra grew up and is a male!"));
    }
}
