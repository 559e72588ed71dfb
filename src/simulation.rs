// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Simulation Core

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use crate::capacity::{self, LinkLoadTracker};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::registry::PacketRegistry;
use crate::schedule::TrafficSchedule;
use crate::topology::TopologyStore;
use crate::types::*;

// ─── NetworkSimulation struct ────────────────────────────────────────────────

/// One simulation context: both graphs, the schedule cursor, live packets and
/// the destination RNG. Every operation goes through `&mut self`, so there is
/// exactly one writer for the registry and the cursor.
#[wasm_bindgen]
pub struct NetworkSimulation {
    pub(crate) config: SimConfig,
    pub(crate) store: TopologyStore,
    pub(crate) schedule: TrafficSchedule,
    pub(crate) registry: PacketRegistry,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) stats: SimStats,
    pub(crate) last_loads: Vec<LinkLoad>,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl NetworkSimulation {
    pub fn with_config(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let schedule = TrafficSchedule::new(config.schedule.clone())?;
        let store = TopologyStore::new(
            Topology {
                nodes: config.nodes.clone(),
                connections: config.connections.clone(),
            },
            config.links.clone(),
        );
        let last_loads = capacity::idle_loads(store.backbone());
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            store,
            schedule,
            registry: PacketRegistry::new(),
            stats: SimStats::default(),
            last_loads,
        })
    }

    /// Client topology plus the schedule clock.
    pub fn get_network_core(&self) -> NetworkView {
        NetworkView {
            nodes: self.store.nodes().to_vec(),
            connections: self.store.connections().to_vec(),
            time: self.schedule.current_timestamp().to_string(),
            interval: self.schedule.index(),
        }
    }

    pub fn set_network_core(&mut self, topology: Topology) {
        self.store.set_topology(topology.nodes, topology.connections);
    }

    /// Route over the client topology and register the packet.
    pub fn send_packet_core(
        &mut self,
        from: NodeId,
        to: NodeId,
        payload: Value,
    ) -> Result<SimPacket, SimError> {
        let path = self
            .store
            .connection_graph()
            .find_path(&from, &to)
            .ok_or(SimError::NoPath { from, to })?;
        self.stats.sent += 1;
        Ok(self.registry.spawn(path, payload).clone())
    }

    /// Generate one interval of schedule traffic over the backbone, then step
    /// the schedule.
    ///
    /// Unroutable units are dropped and counted. If the slot has any demand
    /// but the client node set offers fewer than two destinations, nothing is
    /// generated and the cursor stays where it is.
    pub fn simulate_interval_core(&mut self) -> Result<IntervalReport, SimError> {
        let entry = self.schedule.current_entry().clone();
        let nodes = self.store.nodes().to_vec();
        if entry.total_demand() > 0 && nodes.len() < 2 {
            return Err(SimError::InsufficientNodes { available: nodes.len() });
        }

        let payload = Value::String(format!("Auto {}", entry.timestamp));
        let mut tracker = LinkLoadTracker::new(self.store.backbone());
        let mut generated = 0u32;
        let mut dropped = 0u32;

        for (source, &rate) in &entry.rates {
            let candidates: Vec<&NodeId> = nodes.iter().filter(|n| *n != source).collect();
            for _ in 0..rate {
                let dest = candidates[self.rng.gen_range(0..candidates.len())];
                match self.store.backbone_graph().find_path(source, dest) {
                    Some(path) => {
                        tracker.record_path(self.store.backbone(), &path);
                        self.registry.spawn(path, payload.clone());
                        generated += 1;
                    }
                    None => {
                        debug!(from = %source, to = %dest, "no backbone path, unit dropped");
                        dropped += 1;
                    }
                }
            }
        }

        let loads = tracker.finish(self.store.backbone());
        self.last_loads = loads.clone();
        self.stats.intervals += 1;
        self.stats.generated += generated as u64;
        self.stats.dropped += dropped as u64;

        let time = self.schedule.advance().to_string();
        info!(
            simulated = %entry.timestamp,
            next = %time,
            generated,
            dropped,
            live = self.registry.len(),
            "interval simulated"
        );

        Ok(IntervalReport {
            simulated: entry.timestamp,
            time,
            interval: self.schedule.index(),
            generated,
            dropped,
            link_loads: loads,
        })
    }

    pub fn packets(&self) -> &[SimPacket] {
        self.registry.packets()
    }

    /// Move every packet one hop and retire those already delivered.
    /// Returns the live set afterwards.
    pub fn advance_core(&mut self) -> Vec<SimPacket> {
        let retired = self.registry.tick();
        self.stats.delivered += retired as u64;
        self.registry.packets().to_vec()
    }

    /// Advisory backbone loads from the most recent interval.
    pub fn link_loads(&self) -> &[LinkLoad] {
        &self.last_loads
    }

    pub fn stats(&self) -> SimStats {
        SimStats { live: self.registry.len(), ..self.stats.clone() }
    }

    pub fn schedule(&self) -> &TrafficSchedule {
        &self.schedule
    }

    pub fn topology(&self) -> &TopologyStore {
        &self.store
    }

    /// Rebuild from the construction config, seed included.
    pub fn reset_core(&mut self) -> Result<(), SimError> {
        *self = NetworkSimulation::with_config(self.config.clone())?;
        Ok(())
    }
}
