// Packet Flow Simulator Runner
// Drives the engine through schedule intervals and animation ticks from the
// command line, then prints a JSON run report.
//
// Usage:
//   cargo run --release --bin netsim                            # reference config, 4 intervals
//   cargo run --release --bin netsim -- --intervals 12 --ticks 3
//   cargo run --release --bin netsim -- --config net.json --seed 42
//   cargo run --release --bin netsim -- --time-series out/run.jsonl

mod report;
mod time_series;

use clap::Parser;
use netsim_engine::{NetworkSimulation, SimConfig, Topology};
use report::RunReport;
use std::error::Error;
use std::path::PathBuf;
use time_series::TimeSeriesRecorder;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ─── CLI ────────────────────────────────────────────────────────────────────

/// Packet flow simulator
///
/// Generates schedule traffic over the backbone and advances packets hop by
/// hop. Reproducible for a given seed.
#[derive(Parser, Debug)]
#[command(name = "netsim")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config document. Omitted fields use the reference deployment.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Destination RNG seed; overrides the config's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of schedule intervals to simulate
    #[arg(short, long, default_value = "4")]
    intervals: u64,

    /// Animation ticks to run after each interval
    #[arg(short, long, default_value = "4")]
    ticks: u64,

    /// Write one JSON line per interval to this path
    #[arg(long)]
    time_series: Option<PathBuf>,
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,netsim_engine=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::reference(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let seed = config.seed;

    let mut sim = NetworkSimulation::with_config(config)?;

    // Schedule traffic needs destinations; default to the backbone's nodes
    if sim.topology().nodes().is_empty() {
        let nodes = sim.topology().backbone_nodes();
        info!(count = nodes.len(), "no client nodes configured, using backbone nodes");
        sim.set_network_core(Topology { nodes, connections: Vec::new() });
    }

    let mut recorder = TimeSeriesRecorder::new();

    println!("\n  Packet Flow Simulator");
    println!("  PRNG: ChaCha8Rng | Seed: {} | Intervals: {} | Ticks/interval: {}\n",
        seed, args.intervals, args.ticks);
    println!("  {:<10} {:>10} {:>9} {:>8} {:>10} {:>10}",
        "Slot", "Generated", "Dropped", "Live", "Delivered", "Saturated");
    println!("  {}", "-".repeat(62));

    for _ in 0..args.intervals {
        let report = sim.simulate_interval_core()?;
        for _ in 0..args.ticks {
            sim.advance_core();
        }
        let stats = sim.stats();
        println!("  {:<10} {:>10} {:>9} {:>8} {:>10} {:>10}",
            report.simulated,
            report.generated,
            report.dropped,
            stats.live,
            stats.delivered,
            report.link_loads.iter().filter(|l| l.saturated).count(),
        );
        recorder.record(&report, &stats);
    }

    println!("  {}\n", "-".repeat(62));

    if let Some(path) = &args.time_series {
        recorder.write_jsonl(path)?;
        println!("  Time series ({} intervals) saved to: {}\n", recorder.len(), path.display());
    }

    let report = RunReport::new(
        seed,
        args.ticks,
        sim.schedule().current_timestamp().to_string(),
        sim.stats(),
        sim.link_loads().to_vec(),
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
