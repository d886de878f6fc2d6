// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine

pub mod types;
pub mod error;
pub mod constants;
pub mod catalog;
pub mod clock;
pub mod adapter;

// Economy components
pub mod bonus;
pub mod demand;
pub mod growth;
pub mod ledger;
pub mod appeal;
pub mod breeding;
pub mod stats;
pub mod appraisal;

// Orchestrators
pub mod offline;
pub mod status;
pub mod engine;

pub use types::*;
pub use catalog::{ItemCatalog, ItemCategory, ItemDefinition, SpeciesCatalog, SpeciesEconomyProfile};
pub use clock::{AlternatingGenders, Clock, FixedClock, FixedGender, GenderSource, RngGenderSource};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use constants::EconomyConstants;
pub use engine::ZooEconomy;
pub use error::{EngineError, EngineResult};

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(s: &str);
}

// ─── Console Logging ─────────────────────────────────────────────────────────

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[zoo-engine] {}", record.args());
        match record.level() {
            log::Level::Error => console_error(&line),
            log::Level::Warn => console_warn(&line),
            log::Level::Info => console_log(&line),
            log::Level::Debug | log::Level::Trace => console_debug(&line),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn decode<T: DeserializeOwned>(value: JsValue) -> EngineResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| EngineError::Decode(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> EngineResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| EngineError::Encode(e.to_string()))
}

/// JS numbers carry whole milliseconds; anything fractional is truncated.
fn timestamp(ms: f64) -> Timestamp {
    Timestamp::from_millis(if ms.is_finite() { ms as i64 } else { 0 })
}

fn seed(raw: f64) -> u64 {
    if raw.is_finite() && raw >= 0.0 { raw as u64 } else { 0 }
}

#[wasm_bindgen]
impl ZooEconomy {
    #[wasm_bindgen(constructor)]
    pub fn create(seed_value: f64) -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        ZooEconomy::new(seed(seed_value))
    }

    /// Partial overrides are allowed; missing fields keep the shipped tuning.
    #[wasm_bindgen(js_name = with_constants)]
    pub fn js_with_constants(seed_value: f64, constants: JsValue) -> Result<ZooEconomy, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let constants: EconomyConstants = decode(constants)?;
        Ok(ZooEconomy::with_constants(seed(seed_value), constants)?)
    }

    #[wasm_bindgen(js_name = compute_offline_rewards)]
    pub fn js_compute_offline_rewards(&mut self, request: JsValue, now_ms: f64) -> Result<JsValue, JsValue> {
        let request: OfflineRewardsRequest = decode(request)?;
        let summary = self.compute_offline_rewards_at(&request, timestamp(now_ms));
        Ok(encode(&summary)?)
    }

    #[wasm_bindgen(js_name = compute_breeding)]
    pub fn js_compute_breeding(
        &self,
        animals: JsValue,
        last_check_ms: Option<f64>,
        now_ms: f64,
    ) -> Result<JsValue, JsValue> {
        let animals: Vec<AnimalInstance> = decode(animals)?;
        let outcome = self.compute_breeding(
            &animals,
            last_check_ms.map(timestamp),
            &FixedClock(timestamp(now_ms)),
        );
        Ok(encode(&outcome)?)
    }

    #[wasm_bindgen(js_name = compute_economy_status)]
    pub fn js_compute_economy_status(
        &self,
        animals: JsValue,
        owned_items: JsValue,
        price: f64,
    ) -> Result<JsValue, JsValue> {
        let animals: Vec<AnimalInstance> = decode(animals)?;
        let owned: Vec<ItemId> = decode(owned_items)?;
        Ok(encode(&self.compute_economy_status(&animals, &owned, price))?)
    }

    #[wasm_bindgen(js_name = compute_animal_stats)]
    pub fn js_compute_animal_stats(&self, animals: JsValue) -> Result<JsValue, JsValue> {
        let animals: Vec<AnimalInstance> = decode(animals)?;
        Ok(encode(&self.compute_animal_stats(&animals))?)
    }

    /// Whole coins; 0 for a species the catalog does not know.
    #[wasm_bindgen(js_name = compute_sell_price)]
    pub fn js_compute_sell_price(&self, animal: JsValue) -> Result<f64, JsValue> {
        let animal: AnimalInstance = decode(animal)?;
        Ok(self.compute_sell_price(&animal).unwrap_or(0) as f64)
    }

    /// Headline for an offline summary previously returned by `compute_offline_rewards`.
    #[wasm_bindgen(js_name = offline_headline)]
    pub fn js_offline_headline(&self, summary: JsValue) -> Result<String, JsValue> {
        let summary: OfflineRewardsSummary = decode(summary)?;
        Ok(summary.headline())
    }

    /// The tuning table in effect, as a plain object.
    #[wasm_bindgen(js_name = get_constants)]
    pub fn js_get_constants(&self) -> Result<JsValue, JsValue> {
        Ok(encode(self.constants())?)
    }
}
