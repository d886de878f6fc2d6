// Monte Carlo Infrastructure: N seeded runs per scenario with aggregation
// Session gaps and evolution coin flips both derive from the run seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zoo_engine::*;

use crate::report::*;
use crate::scenarios::{Scenario, EPOCH};
use crate::time_series::TimeSeriesRecorder;

use std::time::Instant;

/// Play one scenario end to end with a specific seed.
pub fn run_single(
    scenario: &Scenario,
    seed: u64,
    time_series_dir: Option<&std::path::Path>,
) -> RunResult {
    let start = Instant::now();
    let mut engine = ZooEconomy::new(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed_0f_5e55_1075);
    let constants = engine.constants().clone();

    let owned_items = scenario.items();
    let mut animals = scenario.starting_animals();
    let mut coins = scenario.starting_coins;
    let mut last_seen = EPOCH;
    let mut last_breeding: Option<Timestamp> = None;
    let end = EPOCH.plus_hours(scenario.days as f64 * 24.0);

    let mut time_series = time_series_dir.map(|_| TimeSeriesRecorder::new());

    let mut sessions = 0u32;
    let mut hours_credited = 0.0;
    let mut peak_coins = coins;
    let mut evolved = 0u32;
    let mut babies_bred = 0u32;
    let mut breeding_checks = 0u32;
    let mut animals_sold = 0u32;
    let mut sale_revenue = 0u64;
    let mut deficit_sessions = 0u32;
    let mut capped_sessions = 0u32;
    let mut invariants_hold = true;
    let mut last_status = engine.compute_economy_status(&animals, &owned_items, scenario.ticket_price);
    let mut last_headline = String::new();

    loop {
        let gap = rng.gen_range(scenario.gap_hours.0..=scenario.gap_hours.1);
        let now = last_seen.plus_hours(gap);
        if now > end {
            break;
        }
        sessions += 1;

        // Welcome back: reconcile the time away.
        let request = OfflineRewardsRequest {
            last_seen_at: last_seen,
            animals: std::mem::take(&mut animals),
            coins,
            owned_items: owned_items.clone(),
            ticket_price: scenario.ticket_price,
        };
        let offline = engine.compute_offline_rewards_at(&request, now);
        invariants_hold &= offline.effective_hours <= constants.max_offline_hours;
        invariants_hold &= offline.coins <= constants.coin_cap;
        hours_credited += offline.effective_hours;
        evolved += offline.evolved.len() as u32;
        animals = offline.animals.clone();
        coins = offline.coins;
        last_headline = offline.headline();

        // Daily breeding check.
        let outcome = engine.compute_breeding(&animals, last_breeding, &FixedClock(now));
        if let Some(checked) = outcome.checked_at {
            last_breeding = Some(checked);
            breeding_checks += 1;
        }
        let bred = outcome.new_babies.len();
        babies_bred += bred as u32;
        animals.extend(outcome.new_babies);

        // Sell the newest babies once the zoo outgrows its cap.
        if let Some(cap) = scenario.herd_cap {
            while animals.len() > cap {
                let Some(pos) = animals.iter().rposition(|a| a.is_baby()) else { break };
                let sold = animals.remove(pos);
                let price = engine.compute_sell_price(&sold).unwrap_or(0);
                sale_revenue += price;
                coins = coins.saturating_add(price).min(constants.coin_cap);
                animals_sold += 1;
            }
        }

        invariants_hold &= animals.iter().all(|a| a.is_baby() || a.gender.is_some());
        invariants_hold &= animals
            .iter()
            .filter(|a| a.is_baby())
            .all(|a| a.experience < constants.evolution_threshold);

        let status = engine.compute_economy_status(&animals, &owned_items, scenario.ticket_price);
        if status.in_deficit {
            deficit_sessions += 1;
        }
        if coins == constants.coin_cap {
            capped_sessions += 1;
        }
        peak_coins = peak_coins.max(coins);

        if let Some(ref mut ts) = time_series {
            ts.record(now, &offline, bred, animals.len(), &status);
        }

        last_status = status;
        last_seen = now;
    }

    if let (Some(ts), Some(dir)) = (&time_series, time_series_dir) {
        let path = dir.join(format!("seed-{}.jsonl", seed));
        if let Err(e) = ts.write_jsonl(&path) {
            eprintln!("  Warning: failed to write time series: {}", e);
        }
    }

    let final_adults = animals.iter().filter(|a| a.is_adult()).count();

    let criteria = &scenario.criteria;
    let mut pass = invariants_hold;
    if let Some(min) = criteria.min_final_coins {
        pass &= coins >= min;
    }
    if let Some(expect) = criteria.expect_deficit {
        pass &= last_status.in_deficit == expect;
    }
    if criteria.expect_coin_cap {
        pass &= capped_sessions > 0;
    }
    if criteria.expect_breeding {
        pass &= babies_bred > 0;
    }
    if criteria.expect_sales {
        pass &= animals_sold > 0;
    }

    RunResult {
        scenario: scenario.label.to_string(),
        name: scenario.name.to_string(),
        seed,
        pass,
        sessions,
        hours_credited,
        hours_elapsed: last_seen.hours_since(EPOCH),
        final_coins: coins,
        peak_coins,
        final_animals: animals.len(),
        final_adults,
        final_babies: animals.len() - final_adults,
        evolved,
        babies_bred,
        breeding_checks,
        animals_sold,
        sale_revenue,
        deficit_sessions,
        capped_sessions,
        final_hourly_net: last_status.hourly_net,
        final_attractiveness: last_status.attractiveness,
        final_satisfaction: last_status.satisfaction,
        invariants_hold,
        last_headline,
        elapsed_ms: start.elapsed().as_millis(),
    }
}

/// N runs of a scenario with seeds `base_seed..base_seed + n`.
pub fn run_monte_carlo(
    scenario: &Scenario,
    n_runs: usize,
    base_seed: u64,
    time_series_base: Option<&std::path::Path>,
) -> ScenarioReport {
    let ts_dir = time_series_base.map(|base| base.join(scenario.name.to_lowercase()));

    let results: Vec<RunResult> = (0..n_runs)
        .map(|i| run_single(scenario, base_seed + i as u64, ts_dir.as_deref()))
        .collect();

    aggregate(scenario, results)
}

fn aggregate(scenario: &Scenario, results: Vec<RunResult>) -> ScenarioReport {
    let n = results.len();
    let passed = results.iter().filter(|r| r.pass).count();
    let stat = |f: fn(&RunResult) -> f64| {
        Stats::from_samples(&results.iter().map(f).collect::<Vec<_>>())
    };

    ScenarioReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        n_runs: n,
        pass_rate: if n > 0 { passed as f64 / n as f64 } else { 0.0 },
        final_coins: stat(|r| r.final_coins as f64),
        final_animals: stat(|r| r.final_animals as f64),
        evolved: stat(|r| r.evolved as f64),
        babies_bred: stat(|r| r.babies_bred as f64),
        sale_revenue: stat(|r| r.sale_revenue as f64),
        deficit_sessions: stat(|r| r.deficit_sessions as f64),
        final_hourly_net: stat(|r| r.final_hourly_net),
        individual_runs: results,
    }
}
