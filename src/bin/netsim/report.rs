// Run Report Types
// Structured output printed at the end of a run

use netsim_engine::{LinkLoad, SimStats};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub intervals: u64,
    pub ticks_per_interval: u64,
    pub final_time: String,
    pub stats: SimStats,
    pub delivery_rate: f64,
    pub drop_rate: f64,
    pub last_link_loads: Vec<LinkLoad>,
}

impl RunReport {
    pub fn new(
        seed: u64,
        ticks_per_interval: u64,
        final_time: String,
        stats: SimStats,
        last_link_loads: Vec<LinkLoad>,
    ) -> Self {
        let created = stats.generated + stats.sent;
        let demand = stats.generated + stats.dropped;
        Self {
            seed,
            intervals: stats.intervals,
            ticks_per_interval,
            final_time,
            delivery_rate: ratio(stats.delivered, created),
            drop_rate: ratio(stats.dropped, demand),
            stats,
            last_link_loads,
        }
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
