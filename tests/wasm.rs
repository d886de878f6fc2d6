#![cfg(target_arch = "wasm32")]

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use zoo_engine::*;

wasm_bindgen_test_configure!(run_in_browser);

const HOUR_MS: f64 = 3_600_000.0;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap()
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue) -> T {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn offline_rewards_cross_the_boundary() {
    init_logging();
    let mut zoo = ZooEconomy::create(7.0);
    let request = OfflineRewardsRequest {
        last_seen_at: Timestamp(0),
        animals: vec![AnimalInstance { experience: 970, ..AnimalInstance::newborn("lion", Timestamp(0)) }],
        coins: 10,
        owned_items: vec![],
        ticket_price: 10.0,
    };
    let out = zoo.js_compute_offline_rewards(to_js(&request), 10.0 * HOUR_MS).unwrap();
    let summary: OfflineRewardsSummary = from_js(out);
    assert_eq!(summary.effective_hours, 4.0);
    assert!(summary.animals[0].is_adult());
    assert!(summary.animals[0].gender.is_some());
}

#[wasm_bindgen_test]
fn bad_input_is_an_error_not_a_panic() {
    let zoo = ZooEconomy::create(1.0);
    assert!(zoo.js_compute_animal_stats(JsValue::from_str("not animals")).is_err());
    assert!(ZooEconomy::js_with_constants(1.0, to_js(&EconomyConstants {
        price_elasticity: 2.0,
        ..Default::default()
    }))
    .is_err());
}

#[wasm_bindgen_test]
fn unknown_species_sells_for_nothing() {
    let zoo = ZooEconomy::create(1.0);
    let yeti = AnimalInstance::adult("yeti", Gender::Male, Timestamp(0));
    let lion = AnimalInstance::adult("lion", Gender::Male, Timestamp(0));
    assert_eq!(zoo.js_compute_sell_price(to_js(&yeti)).unwrap(), 0.0);
    assert_eq!(zoo.js_compute_sell_price(to_js(&lion)).unwrap(), 120.0);
}

#[wasm_bindgen_test]
fn breeding_gate_uses_last_check() {
    let zoo = ZooEconomy::create(1.0);
    let herd = vec![
        AnimalInstance::adult("zebra", Gender::Female, Timestamp(0)),
        AnimalInstance::adult("zebra", Gender::Male, Timestamp(0)),
    ];
    let open: BreedingOutcome = from_js(zoo.js_compute_breeding(to_js(&herd), None, 0.0).unwrap());
    let closed: BreedingOutcome =
        from_js(zoo.js_compute_breeding(to_js(&herd), Some(0.0), 2.0 * HOUR_MS).unwrap());
    assert_eq!(open.new_babies.len(), 1);
    assert!(closed.new_babies.is_empty());
}
