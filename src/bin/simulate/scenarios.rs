// Scenario Definitions for the zoo session simulator
// Each scenario is a starting zoo plus a play pattern; the engine is untouched.

use zoo_engine::{AnimalInstance, Gender, ItemId, Timestamp};

/// Unix millis every run starts from. Arbitrary but fixed so runs compare.
pub const EPOCH: Timestamp = Timestamp(1_700_000_000_000);

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub days: u32,
    /// Hours between two sessions are drawn uniformly from this range.
    pub gap_hours: (f64, f64),
    pub ticket_price: f64,
    pub starting_coins: u64,
    pub herd: Vec<HerdEntry>,
    pub owned_items: Vec<&'static str>,
    /// When set, the newest babies are sold once the zoo grows past this size.
    pub herd_cap: Option<usize>,
    pub criteria: PassCriteria,
}

#[derive(Clone, Copy)]
pub struct HerdEntry {
    pub species: &'static str,
    pub females: u32,
    pub males: u32,
    pub babies: u32,
}

pub struct PassCriteria {
    pub min_final_coins: Option<u64>,
    pub expect_deficit: Option<bool>,
    pub expect_coin_cap: bool,
    pub expect_breeding: bool,
    pub expect_sales: bool,
}

impl Default for PassCriteria {
    fn default() -> Self {
        Self {
            min_final_coins: None,
            expect_deficit: None,
            expect_coin_cap: false,
            expect_breeding: false,
            expect_sales: false,
        }
    }
}

impl Scenario {
    pub fn starting_animals(&self) -> Vec<AnimalInstance> {
        let mut animals = Vec::new();
        for entry in &self.herd {
            for _ in 0..entry.females {
                animals.push(AnimalInstance::adult(entry.species, Gender::Female, EPOCH));
            }
            for _ in 0..entry.males {
                animals.push(AnimalInstance::adult(entry.species, Gender::Male, EPOCH));
            }
            for _ in 0..entry.babies {
                animals.push(AnimalInstance::newborn(entry.species, EPOCH));
            }
        }
        animals
    }

    pub fn items(&self) -> Vec<ItemId> {
        self.owned_items.iter().map(|s| ItemId::from(*s)).collect()
    }
}

fn pair(species: &'static str) -> HerdEntry {
    HerdEntry { species, females: 1, males: 1, babies: 0 }
}

// ─── Scenarios ──────────────────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "STARTER_PAIR",
            label: "Starter rabbit pair",
            category: "growth",
            days: 14,
            gap_hours: (1.0, 6.0),
            ticket_price: 10.0,
            starting_coins: 100,
            herd: vec![pair("rabbit")],
            owned_items: vec![],
            herd_cap: None,
            criteria: PassCriteria {
                expect_breeding: true,
                min_final_coins: Some(100),
                ..Default::default()
            },
        },
        Scenario {
            name: "LION_PRIDE",
            label: "Lion pride with savanna",
            category: "growth",
            days: 30,
            gap_hours: (2.0, 8.0),
            ticket_price: 12.0,
            starting_coins: 500,
            herd: vec![HerdEntry { species: "lion", females: 2, males: 1, babies: 3 }],
            owned_items: vec!["savanna_habitat", "fountain", "snack_kiosk", "nutrition_program"],
            herd_cap: None,
            criteria: PassCriteria {
                expect_breeding: true,
                expect_deficit: Some(false),
                min_final_coins: Some(500),
                ..Default::default()
            },
        },
        Scenario {
            name: "PRICE_GOUGER",
            label: "Ticket price 4x reference",
            category: "pricing",
            days: 14,
            gap_hours: (1.0, 6.0),
            ticket_price: 40.0,
            starting_coins: 100,
            herd: vec![pair("giraffe"), pair("zebra")],
            owned_items: vec!["jungle_habitat"],
            herd_cap: None,
            criteria: PassCriteria {
                min_final_coins: Some(100),
                ..Default::default()
            },
        },
        Scenario {
            name: "BARGAIN_BIN",
            label: "Free entry clamps to minimum price",
            category: "pricing",
            days: 7,
            gap_hours: (1.0, 4.0),
            ticket_price: 0.0,
            starting_coins: 0,
            herd: vec![pair("penguin"), pair("monkey")],
            owned_items: vec!["fish_bucket", "fruit_basket"],
            herd_cap: None,
            criteria: PassCriteria::default(),
        },
        Scenario {
            name: "OVERCROWDED",
            label: "Forty adult male rabbits",
            category: "upkeep",
            days: 7,
            gap_hours: (2.0, 6.0),
            ticket_price: 1.0,
            starting_coins: 2_000,
            herd: vec![HerdEntry { species: "rabbit", females: 0, males: 40, babies: 0 }],
            owned_items: vec![],
            herd_cap: None,
            criteria: PassCriteria {
                expect_deficit: Some(true),
                ..Default::default()
            },
        },
        Scenario {
            name: "COIN_CAP",
            label: "Rich zoo pinned at the coin cap",
            category: "limits",
            days: 3,
            gap_hours: (3.0, 5.0),
            ticket_price: 15.0,
            starting_coins: 999_900,
            herd: vec![HerdEntry { species: "tiger", females: 3, males: 3, babies: 0 }],
            owned_items: vec!["gift_shop", "billboard"],
            herd_cap: None,
            criteria: PassCriteria {
                expect_coin_cap: true,
                ..Default::default()
            },
        },
        Scenario {
            name: "LONG_ABSENCE",
            label: "Player returns every few days",
            category: "limits",
            days: 30,
            gap_hours: (20.0, 72.0),
            ticket_price: 10.0,
            starting_coins: 50,
            herd: vec![HerdEntry { species: "panda", females: 1, males: 1, babies: 2 }],
            owned_items: vec!["bamboo_grove"],
            herd_cap: None,
            criteria: PassCriteria {
                expect_breeding: true,
                ..Default::default()
            },
        },
        Scenario {
            name: "HERD_CAP",
            label: "Breeder sells surplus babies",
            category: "liquidation",
            days: 21,
            gap_hours: (4.0, 12.0),
            ticket_price: 10.0,
            starting_coins: 200,
            herd: vec![
                HerdEntry { species: "kangaroo", females: 3, males: 2, babies: 0 },
                pair("elephant"),
            ],
            owned_items: vec!["volunteer_keepers", "climbing_frame"],
            herd_cap: Some(12),
            criteria: PassCriteria {
                expect_breeding: true,
                expect_sales: true,
                ..Default::default()
            },
        },
    ]
}
