// Per-Interval JSONL Time Series Recorder
// One JSON line per simulated interval for offline analysis

use netsim_engine::{IntervalReport, SimStats};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct IntervalSnapshot {
    pub interval: u64,
    pub simulated: String,
    pub next: String,
    pub generated: u32,
    pub dropped: u32,
    pub live_packets: usize,
    pub delivered_cumulative: u64,
    pub max_link_load: u64,
    pub saturated_links: usize,
}

impl IntervalSnapshot {
    pub fn from_report(report: &IntervalReport, stats: &SimStats) -> Self {
        Self {
            interval: stats.intervals,
            simulated: report.simulated.clone(),
            next: report.time.clone(),
            generated: report.generated,
            dropped: report.dropped,
            live_packets: stats.live,
            delivered_cumulative: stats.delivered,
            max_link_load: report.link_loads.iter().map(|l| l.load).max().unwrap_or(0),
            saturated_links: report.link_loads.iter().filter(|l| l.saturated).count(),
        }
    }
}

/// Accumulates snapshots and writes them as JSONL
pub struct TimeSeriesRecorder {
    snapshots: Vec<IntervalSnapshot>,
}

impl TimeSeriesRecorder {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn record(&mut self, report: &IntervalReport, stats: &SimStats) {
        self.snapshots.push(IntervalSnapshot::from_report(report, stats));
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

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
