// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Tuning Table

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AgeStage, Gender};

/// Static tuning table for the zoo economy.
///
/// `Default` is the shipped tuning. Deserialization fills any missing field
/// from the default, so callers may override a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConstants {
    // -- time --------------------------------------------------------------
    /// Longest offline stretch a single reconciliation will credit.
    pub max_offline_hours: f64,
    /// Minimum hours between two breeding events.
    pub breeding_interval_hours: f64,

    // -- money -------------------------------------------------------------
    /// Upper bound for any coin balance.
    pub coin_cap: u64,
    /// Catalog default ticket price; the elasticity curve is neutral here.
    pub reference_ticket_price: f64,
    /// Prices below this are raised to it before the elasticity curve.
    pub min_ticket_price: f64,
    /// Demand exponent, `0 < e < 1`.
    pub price_elasticity: f64,

    // -- growth ------------------------------------------------------------
    pub base_xp_per_hour: f64,
    pub evolution_threshold: u32,

    // -- upkeep ------------------------------------------------------------
    pub baby_maintenance_per_hour: f64,
    pub adult_female_maintenance_per_hour: f64,
    pub adult_male_maintenance_per_hour: f64,
    /// Each billed animal raises everyone's upkeep by this fraction.
    pub per_animal_cost_growth: f64,

    // -- attractiveness ----------------------------------------------------
    pub attractiveness_per_animal: u32,
    pub attractiveness_per_habitat: u32,
    pub attractiveness_per_decoration: u32,
    pub attractiveness_per_toy: u32,

    // -- satisfaction ------------------------------------------------------
    pub base_satisfaction: u32,
    pub satisfaction_per_animal: u32,
    pub animal_satisfaction_cap: u32,
    pub satisfaction_per_food: u32,
    pub kiosk_satisfaction_boost: u32,

    // -- steady-state snapshot ---------------------------------------------
    pub base_visitors_per_hour: f64,
    pub visitors_per_attraction_point: f64,
    pub kiosk_revenue_per_visitor: f64,

    // -- liquidation -------------------------------------------------------
    /// Hours of adult visitor value that make up an animal's base sell value.
    pub sell_hour_multiplier: u32,
}

impl Default for EconomyConstants {
    fn default() -> Self {
        Self {
            max_offline_hours: 4.0,
            breeding_interval_hours: 24.0,

            coin_cap: 1_000_000,
            reference_ticket_price: 10.0,
            min_ticket_price: 1.0,
            price_elasticity: 0.4,

            base_xp_per_hour: 10.0,
            evolution_threshold: 1000,

            baby_maintenance_per_hour: 1.0,
            adult_female_maintenance_per_hour: 2.0,
            adult_male_maintenance_per_hour: 3.0,
            per_animal_cost_growth: 0.02,

            attractiveness_per_animal: 10,
            attractiveness_per_habitat: 15,
            attractiveness_per_decoration: 5,
            attractiveness_per_toy: 8,

            base_satisfaction: 50,
            satisfaction_per_animal: 2,
            animal_satisfaction_cap: 30,
            satisfaction_per_food: 5,
            kiosk_satisfaction_boost: 10,

            base_visitors_per_hour: 5.0,
            visitors_per_attraction_point: 0.1,
            kiosk_revenue_per_visitor: 2.0,

            sell_hour_multiplier: 10,
        }
    }
}

impl EconomyConstants {
    /// Upkeep per hour before growth, bonuses and elapsed time.
    ///
    /// An adult without a gender (legacy record) is billed at the female tier.
    pub fn maintenance_rate(&self, stage: AgeStage, gender: Option<Gender>) -> f64 {
        match (stage, gender) {
            (AgeStage::Baby, _) => self.baby_maintenance_per_hour,
            (AgeStage::Adult, Some(Gender::Male)) => self.adult_male_maintenance_per_hour,
            (AgeStage::Adult, _) => self.adult_female_maintenance_per_hour,
        }
    }

    /// Clamp a raw elapsed interval to `[0, max_offline_hours]`; NaN becomes 0.
    pub fn clamp_offline_hours(&self, hours: f64) -> f64 {
        if hours.is_nan() || hours <= 0.0 {
            return 0.0;
        }
        hours.min(self.max_offline_hours)
    }

    pub fn clamp_coins(&self, coins: i64) -> u64 {
        if coins <= 0 {
            0
        } else {
            (coins as u64).min(self.coin_cap)
        }
    }

    /// Normalize a caller-supplied ticket price into the elasticity domain.
    pub fn sanitize_price(&self, price: f64) -> f64 {
        if price.is_finite() {
            price.max(self.min_ticket_price)
        } else {
            self.reference_ticket_price
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.validate_time()?;
        self.validate_money()?;
        self.validate_growth()?;
        self.validate_upkeep()?;
        self.validate_snapshot()?;
        Ok(())
    }

    fn validate_time(&self) -> EngineResult<()> {
        require(
            self.max_offline_hours.is_finite() && self.max_offline_hours >= 0.0,
            "max_offline_hours",
            "must be a finite, non-negative number of hours",
        )?;
        require(
            self.breeding_interval_hours.is_finite() && self.breeding_interval_hours > 0.0,
            "breeding_interval_hours",
            "must be a finite, positive number of hours",
        )
    }

    fn validate_money(&self) -> EngineResult<()> {
        require(self.coin_cap > 0, "coin_cap", "must be positive")?;
        require(
            self.coin_cap <= i64::MAX as u64,
            "coin_cap",
            "must fit in a signed 64-bit balance",
        )?;
        require(
            self.min_ticket_price.is_finite() && self.min_ticket_price > 0.0,
            "min_ticket_price",
            "must be positive",
        )?;
        require(
            self.reference_ticket_price.is_finite()
                && self.reference_ticket_price >= self.min_ticket_price,
            "reference_ticket_price",
            "must be at least min_ticket_price",
        )?;
        require(
            self.price_elasticity.is_finite()
                && self.price_elasticity > 0.0
                && self.price_elasticity < 1.0,
            "price_elasticity",
            "must lie strictly between 0 and 1",
        )
    }

    fn validate_growth(&self) -> EngineResult<()> {
        require(
            self.base_xp_per_hour.is_finite() && self.base_xp_per_hour > 0.0,
            "base_xp_per_hour",
            "must be positive",
        )?;
        require(self.evolution_threshold > 0, "evolution_threshold", "must be positive")
    }

    fn validate_upkeep(&self) -> EngineResult<()> {
        let tiers = [
            self.baby_maintenance_per_hour,
            self.adult_female_maintenance_per_hour,
            self.adult_male_maintenance_per_hour,
        ];
        require(
            tiers.iter().all(|t| t.is_finite() && *t >= 0.0),
            "maintenance_per_hour",
            "upkeep tiers must be finite and non-negative",
        )?;
        require(
            tiers[0] < tiers[1] && tiers[1] < tiers[2],
            "maintenance_per_hour",
            "upkeep must rise baby < adult female < adult male",
        )?;
        require(
            self.per_animal_cost_growth.is_finite() && self.per_animal_cost_growth >= 0.0,
            "per_animal_cost_growth",
            "must be non-negative",
        )
    }

    fn validate_snapshot(&self) -> EngineResult<()> {
        require(
            self.base_satisfaction <= 100,
            "base_satisfaction",
            "must not exceed 100",
        )?;
        require(
            self.base_visitors_per_hour.is_finite() && self.base_visitors_per_hour >= 0.0,
            "base_visitors_per_hour",
            "must be non-negative",
        )?;
        require(
            self.visitors_per_attraction_point.is_finite()
                && self.visitors_per_attraction_point >= 0.0,
            "visitors_per_attraction_point",
            "must be non-negative",
        )?;
        require(
            self.kiosk_revenue_per_visitor.is_finite() && self.kiosk_revenue_per_visitor >= 0.0,
            "kiosk_revenue_per_visitor",
            "must be non-negative",
        )
    }
}

fn require(ok: bool, field: &'static str, reason: &str) -> EngineResult<()> {
    if ok {
        Ok(())
    } else {
        Err(EngineError::InvalidConstant { field, reason: reason.to_string() })
    }
}
