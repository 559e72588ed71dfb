// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Topology Store

use std::collections::HashSet;

use crate::routing::Graph;
use crate::types::{Connection, Link, NodeId, Topology};

/// The two graphs a simulation routes over.
///
/// `topology` is the client-editable graph used for explicit sends. `backbone`
/// is the fixed, capacity-annotated graph that carries schedule traffic, so
/// demo load always has a connected network regardless of client edits.
#[derive(Debug, Clone)]
pub struct TopologyStore {
    topology: Topology,
    backbone: Vec<Link>,
    backbone_graph: Graph,
}

impl TopologyStore {
    pub fn new(topology: Topology, backbone: Vec<Link>) -> Self {
        let backbone_graph = Graph::from_edges(&backbone);
        let mut store = Self { topology: Topology::default(), backbone, backbone_graph };
        store.set_topology(topology.nodes, topology.connections);
        store
    }

    /// Replace the client topology wholesale. Duplicate node labels collapse
    /// to their first occurrence; edges are stored as given.
    pub fn set_topology(&mut self, nodes: Vec<NodeId>, connections: Vec<Connection>) {
        let mut seen = HashSet::new();
        let nodes = nodes.into_iter().filter(|n| seen.insert(n.clone())).collect();
        self.topology = Topology { nodes, connections };
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.topology.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.topology.connections
    }

    pub fn backbone(&self) -> &[Link] {
        &self.backbone
    }

    /// Graph over the client topology, rebuilt on demand since it can change
    /// between any two calls.
    pub fn connection_graph(&self) -> Graph {
        Graph::new(&self.topology.nodes, &self.topology.connections)
    }

    pub fn backbone_graph(&self) -> &Graph {
        &self.backbone_graph
    }

    /// Every distinct endpoint named by a backbone link, in first-seen order.
    pub fn backbone_nodes(&self) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for link in &self.backbone {
            for n in [&link.from, &link.to] {
                if seen.insert(n) {
                    nodes.push(n.clone());
                }
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn backbone() -> Vec<Link> {
        vec![Link::new("A", "B", dec!(10)), Link::new("B", "C", dec!(10))]
    }

    #[test]
    fn set_topology_replaces_without_merge() {
        let mut store = TopologyStore::new(Topology::default(), backbone());
        store.set_topology(vec!["A".into(), "B".into()], vec![Connection::new("A", "B")]);
        store.set_topology(vec!["C".into()], Vec::new());
        assert_eq!(store.nodes(), &[NodeId::from("C")]);
        assert!(store.connections().is_empty());
    }

    #[test]
    fn duplicate_nodes_collapse() {
        let mut store = TopologyStore::new(Topology::default(), backbone());
        store.set_topology(vec!["A".into(), "B".into(), "A".into()], Vec::new());
        assert_eq!(store.nodes(), &[NodeId::from("A"), NodeId::from("B")]);
    }

    #[test]
    fn graphs_are_independent() {
        let store = TopologyStore::new(Topology::default(), backbone());
        // Client graph is empty, backbone still routes
        assert_eq!(store.connection_graph().find_path(&"A".into(), &"C".into()), None);
        assert_eq!(
            store.backbone_graph().find_path(&"A".into(), &"C".into()).map(|p| p.len()),
            Some(3)
        );
        assert_eq!(store.backbone_nodes().len(), 3);
    }

    #[test]
    fn unknown_edge_endpoints_accepted() {
        let mut store = TopologyStore::new(Topology::default(), backbone());
        store.set_topology(vec!["A".into()], vec![Connection::new("A", "Q")]);
        assert_eq!(store.connections().len(), 1);
        assert_eq!(store.connection_graph().find_path(&"A".into(), &"Q".into()), None);
    }
}
