// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Type Definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ─── NodeId ──────────────────────────────────────────────────────────────────

/// Opaque network endpoint label ("A", "B", ... in the reference deployment).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self { NodeId(s) }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self { NodeId(s.to_string()) }
}

// ─── Edges ───────────────────────────────────────────────────────────────────

/// Anything that joins two nodes. Direction is ignored for pathfinding.
pub trait Edge {
    fn endpoints(&self) -> (&NodeId, &NodeId);
}

/// Client-editable connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
}

impl Connection {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl Edge for Connection {
    fn endpoints(&self) -> (&NodeId, &NodeId) { (&self.from, &self.to) }
}

/// Backbone link with a declared capacity in traffic units per interval.
/// The capacity is advisory: routing never consults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Decimal,
}

impl Link {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, capacity: Decimal) -> Self {
        Self { from: from.into(), to: to.into(), capacity }
    }

    /// Whether this link joins `a` and `b` in either direction.
    pub fn joins(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

impl Edge for Link {
    fn endpoints(&self) -> (&NodeId, &NodeId) { (&self.from, &self.to) }
}

// ─── Topology ────────────────────────────────────────────────────────────────

/// Client-configured graph. Replaced wholesale by `set_network`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

// ─── Traffic Schedule Entry ──────────────────────────────────────────────────

/// One timetable slot: a label plus packets-per-interval for each source node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub timestamp: String,
    /// Keyed in label order so generation order is stable for a given seed.
    pub rates: BTreeMap<NodeId, u32>,
}

impl ScheduleEntry {
    pub fn new(timestamp: impl Into<String>, rates: &[(&str, u32)]) -> Self {
        Self {
            timestamp: timestamp.into(),
            rates: rates.iter().map(|(n, r)| (NodeId::from(*n), *r)).collect(),
        }
    }

    /// Total demand units this slot asks for.
    pub fn total_demand(&self) -> u64 {
        self.rates.values().map(|r| *r as u64).sum()
    }
}

// ─── SimPacket ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketId(pub u64);

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkt-{}", self.0)
    }
}

/// A simulated unit of traffic walking a precomputed path.
///
/// `progress` indexes into `path`; `path[0] == from` and `path[last] == to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimPacket {
    pub id: PacketId,
    pub from: NodeId,
    pub to: NodeId,
    pub path: Vec<NodeId>,
    pub payload: serde_json::Value,
    pub progress: usize,
}

impl SimPacket {
    /// Index of the final hop.
    pub fn last_index(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// True once the cursor sits on the destination.
    pub fn is_delivered(&self) -> bool {
        self.progress >= self.last_index()
    }

    /// Node the packet currently occupies.
    pub fn position(&self) -> Option<&NodeId> {
        self.path.get(self.progress)
    }
}

// ─── NetworkView ─────────────────────────────────────────────────────────────

/// Read model for `get_network`: the client topology plus the schedule clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkView {
    pub nodes: Vec<NodeId>,
    pub connections: Vec<Connection>,
    pub time: String,
    pub interval: usize,
}

// ─── IntervalReport ──────────────────────────────────────────────────────────

/// Outcome of one `simulate_interval`.
///
/// `time` is the label that is current *after* the call, i.e. the upcoming
/// interval. `simulated` is the label whose rates were just used.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalReport {
    pub simulated: String,
    pub time: String,
    pub interval: usize,
    pub generated: u32,
    pub dropped: u32,
    pub link_loads: Vec<LinkLoad>,
}

// ─── LinkLoad ────────────────────────────────────────────────────────────────

/// Advisory load on one backbone link for a single interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkLoad {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Decimal,
    pub load: u64,
    pub utilization: Decimal,
    pub saturated: bool,
}

// ─── SimStats ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub intervals: u64,
    pub generated: u64,
    pub dropped: u64,
    pub sent: u64,
    pub delivered: u64,
    pub live: usize,
}
