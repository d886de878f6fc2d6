// Zoo Session Simulator v0.3.0
// Seeded multi-day play sessions driving offline rewards, breeding, selling and
// status snapshots through the engine, with per-scenario aggregation.
//
// Usage:
//   cargo run --release --bin simulate                       # All scenarios (10 runs each)
//   cargo run --release --bin simulate -- --runs 3           # Quick mode
//   cargo run --release --bin simulate -- LION               # Filter by name, label or category
//   cargo run --release --bin simulate -- --time-series      # Per-session JSONL output
//   cargo run --release --bin simulate -- --seed 42          # Custom base seed

mod monte_carlo;
mod report;
mod scenarios;
mod time_series;

use report::*;
use scenarios::*;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    time_series: bool,
    verbose: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 10,
        seed: 0,
        time_series: false,
        verbose: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(10).max(1);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--time-series" => cli.time_series = true,
            "--verbose" | "-v" => cli.verbose = true,
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

/// Minimal stderr logger so engine warnings show up with `--verbose`.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("  [{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn });
    }

    let all_scenarios = scenarios();
    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    let ts_dir = cli.time_series.then(|| std::path::PathBuf::from("simulation-results/time-series"));

    println!("\n  Zoo Session Simulator v0.3.0");
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<36} {:>5} {:>10} {:>8} {:>7} {:>7} {:>9}",
        "Scenario", "Pass%", "Coins", "Animals", "Evolved", "Bred", "Net/h");
    println!("  {}", "-".repeat(90));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for scenario in &to_run {
        let report = monte_carlo::run_monte_carlo(scenario, cli.runs, cli.seed, ts_dir.as_deref());
        let pass_pct = report.pass_rate * 100.0;
        let status = if report.pass_rate >= 1.0 { "PASS" } else { "FAIL" };

        println!("  {:<36} {:>4}% {:>10.0} {:>8.1} {:>7.1} {:>7.1} {:>9.2}  {}",
            report.label,
            pass_pct as u32,
            report.final_coins.mean,
            report.final_animals.mean,
            report.evolved.mean,
            report.babies_bred.mean,
            report.final_hourly_net.mean,
            status,
        );
        if cli.verbose {
            if let Some(run) = report.individual_runs.first() {
                println!("      {}", run.last_headline);
            }
        }

        reports.push(report);
    }

    let total = reports.len();
    let passed = reports.iter().filter(|r| r.pass_rate >= 1.0).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(90));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_start.elapsed().as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        .to_string();

    let report = SimulationReport {
        timestamp: timestamp.clone(),
        version: "0.3.0",
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        scenarios: reports,
    };

    let dir = std::path::Path::new("simulation-results");
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("simulate-{}.json", timestamp));
    std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    println!("  Results saved to: {}\n", path.display());

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
