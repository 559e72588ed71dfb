// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::types::{Connection, Link, NodeId, ScheduleEntry};

/// Everything a simulation context is built from.
///
/// Missing fields fall back to the reference deployment, so `{}` is a valid
/// document and `{"seed": 7}` only changes the seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub seed: u64,
    /// Fixed capacity-annotated backbone used for schedule traffic.
    #[serde(default = "reference_links")]
    pub links: Vec<Link>,
    #[serde(default = "reference_schedule")]
    pub schedule: Vec<ScheduleEntry>,
    /// Initial client topology.
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl SimConfig {
    /// Five-node backbone with a one-hour, four-slot timetable.
    pub fn reference() -> Self {
        Self {
            seed: 0,
            links: reference_links(),
            schedule: reference_schedule(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.schedule.is_empty() {
            return Err(SimError::EmptySchedule);
        }
        if let Some(link) = self.links.iter().find(|l| l.capacity <= Decimal::ZERO) {
            return Err(SimError::InvalidCapacity {
                from: link.from.clone(),
                to: link.to.clone(),
            });
        }
        Ok(())
    }
}

fn reference_links() -> Vec<Link> {
    vec![
        Link::new("A", "B", dec!(100)),
        Link::new("A", "C", dec!(80)),
        Link::new("B", "D", dec!(70)),
        Link::new("C", "D", dec!(90)),
        Link::new("C", "E", dec!(100)),
        Link::new("D", "E", dec!(60)),
    ]
}

fn reference_schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::new("08:00", &[("A", 50), ("B", 30), ("C", 40), ("D", 20), ("E", 60)]),
        ScheduleEntry::new("08:15", &[("A", 55), ("B", 35), ("C", 45), ("D", 25), ("E", 65)]),
        ScheduleEntry::new("08:30", &[("A", 60), ("B", 40), ("C", 50), ("D", 30), ("E", 70)]),
        ScheduleEntry::new("08:45", &[("A", 55), ("B", 35), ("C", 45), ("D", 25), ("E", 65)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_shape() {
        let config = SimConfig::reference();
        assert_eq!(config.links.len(), 6);
        assert_eq!(config.schedule.len(), 4);
        assert_eq!(config.schedule[0].timestamp, "08:00");
        assert_eq!(config.schedule[2].total_demand(), 250);
        assert!(config.nodes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_reference() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::reference());
    }

    #[test]
    fn parses_custom_document() {
        let text = r#"{
            "seed": 9,
            "links": [{ "from": "A", "to": "B", "capacity": 5 }],
            "schedule": [
                { "timestamp": "t0", "rates": { "A": 1 } },
                { "timestamp": "t1", "rates": { "A": 1, "B": 2 } }
            ],
            "nodes": ["A", "B"]
        }"#;
        let config = SimConfig::from_json(text).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.links[0].capacity, dec!(5));
        assert_eq!(config.schedule[1].total_demand(), 3);
        assert_eq!(config.nodes, vec![NodeId::from("A"), NodeId::from("B")]);
        assert!(config.connections.is_empty());
    }

    #[test]
    fn rejects_empty_schedule() {
        let err = SimConfig::from_json(r#"{ "schedule": [] }"#).unwrap_err();
        assert_eq!(err, SimError::EmptySchedule);
    }

    #[test]
    fn rejects_non_positive_capacity() {
        let text = r#"{ "links": [{ "from": "A", "to": "B", "capacity": 0 }] }"#;
        assert!(matches!(
            SimConfig::from_json(text),
            Err(SimError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(SimConfig::from_json("{ nope"), Err(SimError::Config(_))));
    }
}
