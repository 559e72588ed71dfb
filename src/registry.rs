// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Packet Registry

use tracing::debug;

use crate::types::{NodeId, PacketId, SimPacket};

/// Live packets plus the id allocator.
///
/// Creation appends, retirement filters in place. Ids come from a counter
/// that never rewinds, so they stay unique for the registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct PacketRegistry {
    packets: Vec<SimPacket>,
    next_id: u64,
}

impl PacketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a packet at the start of `path`. `path` must be non-empty.
    pub fn spawn(&mut self, path: Vec<NodeId>, payload: serde_json::Value) -> &SimPacket {
        debug_assert!(!path.is_empty(), "packet path must include its source");
        self.next_id += 1;
        let from = path.first().cloned().unwrap_or_else(|| NodeId::from(""));
        let to = path.last().cloned().unwrap_or_else(|| from.clone());
        self.packets.push(SimPacket {
            id: PacketId(self.next_id),
            from,
            to,
            path,
            payload,
            progress: 0,
        });
        &self.packets[self.packets.len() - 1]
    }

    pub fn packets(&self) -> &[SimPacket] {
        &self.packets
    }

    pub fn get(&self, id: PacketId) -> Option<&SimPacket> {
        self.packets.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// One animation step.
    ///
    /// Packets short of their destination move one hop. Packets that were
    /// already sitting on their destination before this call are then
    /// retired, so a delivered packet is visible to the caller exactly once.
    /// Returns how many packets were retired.
    pub fn tick(&mut self) -> usize {
        let before = self.packets.len();
        self.packets.retain_mut(|p| {
            if p.is_delivered() {
                return false;
            }
            p.progress += 1;
            true
        });
        let retired = before - self.packets.len();
        if retired > 0 {
            debug!(retired, live = self.packets.len(), "retired delivered packets");
        }
        retired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|l| NodeId::from(*l)).collect()
    }

    #[test]
    fn spawn_sets_endpoints_and_cursor() {
        let mut reg = PacketRegistry::new();
        let p = reg.spawn(path(&["A", "B", "C"]), json!("x")).clone();
        assert_eq!(p.from, NodeId::from("A"));
        assert_eq!(p.to, NodeId::from("C"));
        assert_eq!(p.progress, 0);
        assert_eq!(p.position(), Some(&NodeId::from("A")));
    }

    #[test]
    fn ids_are_unique_across_retirement() {
        let mut reg = PacketRegistry::new();
        let first = reg.spawn(path(&["A"]), json!(null)).id;
        reg.tick();
        assert!(reg.is_empty());
        let second = reg.spawn(path(&["A"]), json!(null)).id;
        assert_ne!(first, second);
    }

    #[test]
    fn lifecycle_takes_k_minus_one_ticks() {
        for k in 1..6usize {
            let labels: Vec<String> = (0..k).map(|i| format!("N{i}")).collect();
            let hops: Vec<NodeId> = labels.iter().map(|l| NodeId::from(l.as_str())).collect();
            let mut reg = PacketRegistry::new();
            let id = reg.spawn(hops, json!(k)).id;
            for step in 1..k {
                assert_eq!(reg.tick(), 0);
                assert_eq!(reg.get(id).map(|p| p.progress), Some(step));
            }
            assert!(reg.get(id).map(|p| p.is_delivered()).unwrap_or(false));
            assert_eq!(reg.tick(), 1);
            assert!(reg.get(id).is_none(), "path length {k}");
        }
    }

    #[test]
    fn self_path_retired_on_first_tick() {
        let mut reg = PacketRegistry::new();
        reg.spawn(path(&["A"]), json!(null));
        assert_eq!(reg.tick(), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn mixed_packets_progress_independently() {
        let mut reg = PacketRegistry::new();
        let short = reg.spawn(path(&["A", "B"]), json!(1)).id;
        let long = reg.spawn(path(&["A", "B", "C", "D"]), json!(2)).id;
        reg.tick();
        reg.tick();
        assert!(reg.get(short).is_none());
        assert_eq!(reg.get(long).map(|p| p.progress), Some(2));
        assert_eq!(reg.len(), 1);
    }
}
