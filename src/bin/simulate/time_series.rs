// Per-Session JSONL Recorder
// One JSON line per simulated play session

use serde::Serialize;
use std::io::Write;
use zoo_engine::{EconomyStatusSnapshot, OfflineRewardsSummary, Timestamp};

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session: u32,
    pub at_ms: i64,
    pub hours_credited: f64,
    pub visitors: u64,
    pub net_income: String,
    pub coins: u64,
    pub animals: usize,
    pub evolved: usize,
    pub babies_bred: usize,
    pub hourly_net: f64,
    pub satisfaction: u32,
    pub in_deficit: bool,
}

#[derive(Default)]
pub struct TimeSeriesRecorder {
    snapshots: Vec<SessionSnapshot>,
}

impl TimeSeriesRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        at: Timestamp,
        offline: &OfflineRewardsSummary,
        babies_bred: usize,
        animals: usize,
        status: &EconomyStatusSnapshot,
    ) {
        self.snapshots.push(SessionSnapshot {
            session: self.snapshots.len() as u32 + 1,
            at_ms: at.millis(),
            hours_credited: offline.effective_hours,
            visitors: offline.total_visitors,
            net_income: offline.net_income.0.round_dp(2).to_string(),
            coins: offline.coins,
            animals,
            evolved: offline.evolved.len(),
            babies_bred,
            hourly_net: status.hourly_net,
            satisfaction: status.satisfaction,
            in_deficit: status.in_deficit,
        });
    }

    pub fn write_jsonl(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}
