// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Species and Item Catalogs
//
// Read-only reference data. Every item carries its category as data, so a new
// shop item is classified where it is declared rather than by its name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::types::{AgeStage, EconomyBonusVector, ItemId, SpeciesId};

/// Ceiling on a species' hourly draw; keeps every ledger line inside the Decimal range.
pub const MAX_VISITORS_PER_HOUR: f64 = 1_000_000.0;

/// Ceiling on the magnitude of any single bonus component (10.0 = +1000%).
pub const MAX_BONUS_MAGNITUDE: f64 = 10.0;

fn check_range(id: &str, field: &'static str, value: f64, min: f64, max: f64) -> EngineResult<()> {
    let reason = if !value.is_finite() {
        "must be finite".to_string()
    } else if value < min || value > max {
        format!("must be within [{}, {}], got {}", min, max, value)
    } else {
        return Ok(());
    };
    Err(EngineError::InvalidCatalogEntry { id: id.to_string(), field, reason })
}

// ─── Species ─────────────────────────────────────────────────────────────────

/// Per-species economic profile: visitors attracted per hour at each stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEconomyProfile {
    pub id: SpeciesId,
    pub display_name: String,
    pub baby_visitors_per_hour: f64,
    pub adult_visitors_per_hour: f64,
}

impl SpeciesEconomyProfile {
    fn validate(&self) -> EngineResult<()> {
        let id = self.id.0.as_str();
        check_range(id, "baby_visitors_per_hour", self.baby_visitors_per_hour, 0.0, MAX_VISITORS_PER_HOUR)?;
        check_range(id, "adult_visitors_per_hour", self.adult_visitors_per_hour, 0.0, MAX_VISITORS_PER_HOUR)
    }

    pub fn visitors_per_hour(&self, stage: AgeStage) -> f64 {
        match stage {
            AgeStage::Baby => self.baby_visitors_per_hour,
            AgeStage::Adult => self.adult_visitors_per_hour,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    profiles: HashMap<SpeciesId, SpeciesEconomyProfile>,
}

impl SpeciesCatalog {
    pub fn new(profiles: Vec<SpeciesEconomyProfile>) -> EngineResult<Self> {
        let mut map = HashMap::with_capacity(profiles.len());
        for p in profiles {
            p.validate()?;
            if map.contains_key(&p.id) {
                return Err(EngineError::DuplicateSpecies(p.id.0));
            }
            map.insert(p.id.clone(), p);
        }
        Ok(Self { profiles: map })
    }

    /// The species shipped with the game.
    pub fn builtin() -> Self {
        let rows: [(&str, &str, f64, f64); 10] = [
            ("rabbit", "Rabbit", 1.0, 2.0),
            ("penguin", "Penguin", 2.0, 4.0),
            ("monkey", "Monkey", 2.0, 5.0),
            ("zebra", "Zebra", 3.0, 6.0),
            ("kangaroo", "Kangaroo", 3.0, 6.0),
            ("giraffe", "Giraffe", 4.0, 8.0),
            ("panda", "Panda", 5.0, 10.0),
            ("lion", "Lion", 5.0, 12.0),
            ("elephant", "Elephant", 6.0, 14.0),
            ("tiger", "Tiger", 6.0, 15.0),
        ];
        let profiles = rows
            .iter()
            .map(|&(id, name, baby, adult)| {
                (
                    SpeciesId::from(id),
                    SpeciesEconomyProfile {
                        id: SpeciesId::from(id),
                        display_name: name.to_string(),
                        baby_visitors_per_hour: baby,
                        adult_visitors_per_hour: adult,
                    },
                )
            })
            .collect();
        Self { profiles }
    }

    pub fn profile(&self, species: &SpeciesId) -> Option<&SpeciesEconomyProfile> {
        self.profiles.get(species)
    }

    /// Profile lookup that emits the standard diagnostic for an unknown species.
    pub fn profile_or_warn(
        &self,
        species: &SpeciesId,
        context: &str,
    ) -> Option<&SpeciesEconomyProfile> {
        let found = self.profiles.get(species);
        if found.is_none() {
            log::warn!("{}: unknown species `{}`, skipping", context, species);
        }
        found
    }

    pub fn contains(&self, species: &SpeciesId) -> bool {
        self.profiles.contains_key(species)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ─── Items ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Habitat,
    Decoration,
    Toy,
    Food,
    Other,
}

/// A shop item as the economy sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub category: ItemCategory,
    /// Effect on the bonus vector while owned; zero for purely cosmetic items.
    #[serde(default)]
    pub bonus: EconomyBonusVector,
    /// Owning this item opens the snack kiosk.
    #[serde(default)]
    pub opens_kiosk: bool,
}

impl ItemDefinition {
    fn plain(id: &str, category: ItemCategory) -> Self {
        Self {
            id: ItemId::from(id),
            category,
            bonus: EconomyBonusVector::none(),
            opens_kiosk: false,
        }
    }

    fn upgrade(id: &str, bonus: EconomyBonusVector) -> Self {
        Self { bonus, ..Self::plain(id, ItemCategory::Other) }
    }

    fn validate(&self) -> EngineResult<()> {
        let id = self.id.0.as_str();
        let (lo, hi) = (-MAX_BONUS_MAGNITUDE, MAX_BONUS_MAGNITUDE);
        check_range(id, "bonus.visitor_boost", self.bonus.visitor_boost, lo, hi)?;
        check_range(id, "bonus.cost_reduction", self.bonus.cost_reduction, lo, hi)?;
        check_range(id, "bonus.income_multiplier", self.bonus.income_multiplier, lo, hi)?;
        check_range(id, "bonus.xp_bonus", self.bonus.xp_bonus, lo, hi)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> EngineResult<Self> {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            item.validate()?;
            if map.contains_key(&item.id) {
                return Err(EngineError::DuplicateItem(item.id.0));
            }
            map.insert(item.id.clone(), item);
        }
        Ok(Self { items: map })
    }

    /// The shop inventory shipped with the game.
    pub fn builtin() -> Self {
        use ItemCategory::*;
        let items = vec![
            ItemDefinition::plain("savanna_habitat", Habitat),
            ItemDefinition::plain("jungle_habitat", Habitat),
            ItemDefinition::plain("arctic_habitat", Habitat),
            ItemDefinition::plain("bamboo_grove", Habitat),
            ItemDefinition::plain("fountain", Decoration),
            ItemDefinition::plain("flower_bed", Decoration),
            ItemDefinition::plain("statue", Decoration),
            ItemDefinition::plain("lanterns", Decoration),
            ItemDefinition::plain("climbing_frame", Toy),
            ItemDefinition::plain("ball_pit", Toy),
            ItemDefinition::plain("tire_swing", Toy),
            ItemDefinition::plain("fish_bucket", Food),
            ItemDefinition::plain("fruit_basket", Food),
            ItemDefinition::plain("hay_bale", Food),
            ItemDefinition {
                opens_kiosk: true,
                ..ItemDefinition::plain("snack_kiosk", Other)
            },
            ItemDefinition::upgrade(
                "visitor_map",
                EconomyBonusVector { visitor_boost: 0.10, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "billboard",
                EconomyBonusVector { visitor_boost: 0.15, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "bulk_feed_contract",
                EconomyBonusVector { cost_reduction: 0.15, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "volunteer_keepers",
                EconomyBonusVector { cost_reduction: 0.10, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "gift_shop",
                EconomyBonusVector { income_multiplier: 0.20, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "nutrition_program",
                EconomyBonusVector { xp_bonus: 0.25, ..Default::default() },
            ),
            ItemDefinition::upgrade(
                "petting_zone",
                EconomyBonusVector {
                    visitor_boost: 0.05,
                    xp_bonus: 0.10,
                    ..Default::default()
                },
            ),
        ];
        let items = items.into_iter().map(|i| (i.id.clone(), i)).collect();
        Self { items }
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn category_of(&self, id: &ItemId) -> Option<ItemCategory> {
        self.items.get(id).map(|i| i.category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_species_adults_draw_more_than_babies() {
        let catalog = SpeciesCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        let lion = catalog.profile(&SpeciesId::from("lion")).unwrap();
        assert!(lion.visitors_per_hour(AgeStage::Adult) > lion.visitors_per_hour(AgeStage::Baby));
    }

    #[test]
    fn unknown_species_is_absent() {
        let catalog = SpeciesCatalog::builtin();
        assert!(catalog.profile_or_warn(&SpeciesId::from("dragon"), "test").is_none());
    }

    #[test]
    fn duplicate_species_is_rejected() {
        let p = SpeciesEconomyProfile {
            id: SpeciesId::from("owl"),
            display_name: "Owl".to_string(),
            baby_visitors_per_hour: 1.0,
            adult_visitors_per_hour: 2.0,
        };
        let err = SpeciesCatalog::new(vec![p.clone(), p]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateSpecies("owl".to_string()));
    }

    #[test]
    fn duplicate_item_is_rejected() {
        let i = ItemDefinition::plain("rock", ItemCategory::Decoration);
        let err = ItemCatalog::new(vec![i.clone(), i]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateItem("rock".to_string()));
    }

    #[test]
    fn items_carry_their_category() {
        let catalog = ItemCatalog::builtin();
        assert_eq!(
            catalog.category_of(&ItemId::from("savanna_habitat")),
            Some(ItemCategory::Habitat)
        );
        assert_eq!(catalog.category_of(&ItemId::from("ball_pit")), Some(ItemCategory::Toy));
        assert_eq!(catalog.category_of(&ItemId::from("hay_bale")), Some(ItemCategory::Food));
        assert!(catalog.get(&ItemId::from("snack_kiosk")).unwrap().opens_kiosk);
        assert_eq!(catalog.category_of(&ItemId::from("rocket")), None);
    }

    #[test]
    fn oversized_species_draw_is_rejected() {
        let whale = SpeciesEconomyProfile {
            id: SpeciesId::from("whale"),
            display_name: "Whale".to_string(),
            baby_visitors_per_hour: 1.0,
            adult_visitors_per_hour: 5e26,
        };
        match SpeciesCatalog::new(vec![whale]).unwrap_err() {
            EngineError::InvalidCatalogEntry { id, field, .. } => {
                assert_eq!(id, "whale");
                assert_eq!(field, "adult_visitors_per_hour");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn negative_or_nan_species_draw_is_rejected() {
        let mut owl = SpeciesEconomyProfile {
            id: SpeciesId::from("owl"),
            display_name: "Owl".to_string(),
            baby_visitors_per_hour: -1.0,
            adult_visitors_per_hour: 2.0,
        };
        assert!(SpeciesCatalog::new(vec![owl.clone()]).is_err());
        owl.baby_visitors_per_hour = f64::NAN;
        assert!(SpeciesCatalog::new(vec![owl.clone()]).is_err());
        owl.baby_visitors_per_hour = MAX_VISITORS_PER_HOUR;
        assert!(SpeciesCatalog::new(vec![owl]).is_ok());
    }

    #[test]
    fn non_finite_or_huge_item_bonus_is_rejected() {
        let nan = ItemDefinition::upgrade(
            "cursed_idol",
            EconomyBonusVector { income_multiplier: f64::NAN, ..EconomyBonusVector::none() },
        );
        let err = ItemCatalog::new(vec![nan]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidCatalogEntry { field: "bonus.income_multiplier", .. }
        ));

        let huge = ItemDefinition::upgrade(
            "golden_gate",
            EconomyBonusVector { visitor_boost: 1e9, ..EconomyBonusVector::none() },
        );
        assert!(ItemCatalog::new(vec![huge]).is_err());
    }

    #[test]
    fn builtin_rows_pass_validation() {
        let species: Vec<_> = SpeciesCatalog::builtin().profiles.into_values().collect();
        assert!(SpeciesCatalog::new(species).is_ok());
        let items: Vec<_> = ItemCatalog::builtin().items.into_values().collect();
        assert!(ItemCatalog::new(items).is_ok());
    }
}
