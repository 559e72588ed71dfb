// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Advisory Link Capacity
//
// Counts how many packets generated in one interval cross each backbone link
// and compares that against the declared capacity. Nothing here feeds back
// into routing; the numbers are for display and reporting.

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::{Link, LinkLoad, NodeId};

/// Per-interval load accumulator over a fixed link list.
#[derive(Debug, Clone)]
pub struct LinkLoadTracker {
    loads: Vec<u64>,
}

impl LinkLoadTracker {
    pub fn new(links: &[Link]) -> Self {
        Self { loads: vec![0; links.len()] }
    }

    /// Add one unit of load to every link crossed by consecutive hops of `path`.
    /// Hops with no matching link (self-loops, foreign edges) are ignored.
    pub fn record_path(&mut self, links: &[Link], path: &[NodeId]) {
        for hop in path.windows(2) {
            if let Some(idx) = links.iter().position(|l| l.joins(&hop[0], &hop[1])) {
                self.loads[idx] += 1;
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.loads.iter().sum()
    }

    /// Freeze the counts into reportable loads, logging any saturated link.
    pub fn finish(self, links: &[Link]) -> Vec<LinkLoad> {
        links
            .iter()
            .zip(self.loads)
            .map(|(link, load)| {
                let utilization = utilization(load, link.capacity);
                let saturated = Decimal::from(load) > link.capacity;
                if saturated {
                    warn!(
                        from = %link.from,
                        to = %link.to,
                        load,
                        capacity = %link.capacity,
                        "advisory link capacity exceeded"
                    );
                }
                LinkLoad {
                    from: link.from.clone(),
                    to: link.to.clone(),
                    capacity: link.capacity,
                    load,
                    utilization,
                    saturated,
                }
            })
            .collect()
    }
}

/// `load / capacity`, rounded to four places. Zero capacity reads as zero.
pub fn utilization(load: u64, capacity: Decimal) -> Decimal {
    if capacity <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (Decimal::from(load) / capacity).round_dp(4)
}

/// Zero-load report for every link, used before the first interval runs.
pub fn idle_loads(links: &[Link]) -> Vec<LinkLoad> {
    LinkLoadTracker::new(links).finish(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|l| NodeId::from(*l)).collect()
    }

    fn links() -> Vec<Link> {
        vec![
            Link::new("A", "B", dec!(2)),
            Link::new("B", "C", dec!(4)),
            Link::new("C", "D", dec!(80)),
        ]
    }

    #[test]
    fn utilization_ratio() {
        assert_eq!(utilization(40, dec!(80)), dec!(0.5));
        assert_eq!(utilization(1, dec!(3)), dec!(0.3333));
        assert_eq!(utilization(5, dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn path_counts_each_link_in_either_direction() {
        let links = links();
        let mut tracker = LinkLoadTracker::new(&links);
        tracker.record_path(&links, &ids(&["A", "B", "C"]));
        tracker.record_path(&links, &ids(&["C", "B", "A"]));
        tracker.record_path(&links, &ids(&["B", "A"]));
        assert_eq!(tracker.total(), 5);

        let loads = tracker.finish(&links);
        assert_eq!(loads[0].load, 3);
        assert!(loads[0].saturated);
        assert_eq!(loads[1].load, 2);
        assert_eq!(loads[1].utilization, dec!(0.5));
        assert!(!loads[1].saturated);
        assert_eq!(loads[2].load, 0);
    }

    #[test]
    fn exactly_full_is_not_saturated() {
        let links = links();
        let mut tracker = LinkLoadTracker::new(&links);
        tracker.record_path(&links, &ids(&["A", "B"]));
        tracker.record_path(&links, &ids(&["A", "B"]));
        let loads = tracker.finish(&links);
        assert_eq!(loads[0].utilization, dec!(1));
        assert!(!loads[0].saturated);
    }

    #[test]
    fn idle_report_covers_every_link() {
        let loads = idle_loads(&links());
        assert_eq!(loads.len(), 3);
        assert!(loads.iter().all(|l| l.load == 0 && !l.saturated));
    }
}
