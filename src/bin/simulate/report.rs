// Simulation Report Types
// Structured JSON output, one entry per scenario with every run attached

use serde::Serialize;

// ─── Statistics (per-metric aggregation across runs) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub scenario: String,
    pub name: String,
    pub seed: u64,
    pub pass: bool,
    pub sessions: u32,
    pub hours_credited: f64,
    pub hours_elapsed: f64,
    pub final_coins: u64,
    pub peak_coins: u64,
    pub final_animals: usize,
    pub final_adults: usize,
    pub final_babies: usize,
    pub evolved: u32,
    pub babies_bred: u32,
    pub breeding_checks: u32,
    pub animals_sold: u32,
    pub sale_revenue: u64,
    pub deficit_sessions: u32,
    pub capped_sessions: u32,
    pub final_hourly_net: f64,
    pub final_attractiveness: u32,
    pub final_satisfaction: u32,
    /// Every invariant check (coin bounds, offline cap, gendered adults) held.
    pub invariants_hold: bool,
    pub last_headline: String,
    pub elapsed_ms: u128,
}

// ─── Scenario Report (aggregation over runs) ────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub label: String,
    pub category: String,
    pub n_runs: usize,
    pub pass_rate: f64,
    pub final_coins: Stats,
    pub final_animals: Stats,
    pub evolved: Stats,
    pub babies_bred: Stats,
    pub sale_revenue: Stats,
    pub deficit_sessions: Stats,
    pub final_hourly_net: Stats,
    pub individual_runs: Vec<RunResult>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_scenario: usize,
    pub summary: Summary,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}
