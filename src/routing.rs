// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Hop-Count Routing

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{Edge, NodeId};

/// Undirected adjacency view over a node set and an edge list.
///
/// Edges that reference a node outside the node set are skipped, so a
/// malformed edge simply never participates in a path.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Build a graph from an explicit node set.
    pub fn new<E: Edge>(nodes: &[NodeId], edges: &[E]) -> Self {
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = nodes
            .iter()
            .map(|n| (n.clone(), Vec::new()))
            .collect();

        for edge in edges {
            let (a, b) = edge.endpoints();
            if !adjacency.contains_key(a) || !adjacency.contains_key(b) {
                continue;
            }
            if let Some(list) = adjacency.get_mut(a) {
                list.push(b.clone());
            }
            if a != b {
                if let Some(list) = adjacency.get_mut(b) {
                    list.push(a.clone());
                }
            }
        }

        Self { adjacency }
    }

    /// Build a graph whose node set is every endpoint named by `edges`.
    pub fn from_edges<E: Edge>(edges: &[E]) -> Self {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for edge in edges {
            let (a, b) = edge.endpoints();
            for n in [a, b] {
                if seen.insert(n) {
                    nodes.push(n.clone());
                }
            }
        }
        Self::new(&nodes, edges)
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn neighbors(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Unweighted shortest path from `from` to `to`, endpoints inclusive.
    ///
    /// Breadth-first search where each queued item is a whole candidate path,
    /// so the winner needs no parent-map backtrack. Nodes are marked visited
    /// when enqueued, which keeps each node in the queue at most once.
    /// Returns `None` when either endpoint is outside the graph or the two
    /// sit in different components. `from == to` yields `[from]`.
    pub fn find_path(&self, from: &NodeId, to: &NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
        visited.insert(from);
        queue.push_back(vec![from.clone()]);

        while let Some(path) = queue.pop_front() {
            let last = match path.last() {
                Some(n) => n,
                None => continue,
            };
            if last == to {
                return Some(path);
            }
            for next in self.neighbors(last) {
                if visited.insert(next) {
                    let mut extended = path.clone();
                    extended.push(next.clone());
                    queue.push_back(extended);
                }
            }
        }

        None
    }

    /// Hop distance from `from` to every reachable node.
    pub fn distances_from(&self, from: &NodeId) -> HashMap<NodeId, usize> {
        let mut dist = HashMap::new();
        if !self.contains(from) {
            return dist;
        }
        let mut queue = VecDeque::new();
        dist.insert(from.clone(), 0);
        queue.push_back(from.clone());
        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for next in self.neighbors(&current) {
                if !dist.contains_key(next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next.clone());
                }
            }
        }
        dist
    }
}

/// Convenience wrapper: build a graph from `nodes` + `edges` and search it once.
pub fn find_path<E: Edge>(
    nodes: &[NodeId],
    edges: &[E],
    from: &NodeId,
    to: &NodeId,
) -> Option<Vec<NodeId>> {
    Graph::new(nodes, edges).find_path(from, to)
}
