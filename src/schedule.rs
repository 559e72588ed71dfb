// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Traffic Schedule
//
// A fixed, cyclic timetable of per-node demand. The cursor only moves when an
// interval is simulated, so after `simulate_interval` returns, the "current"
// label already names the upcoming slot.

use crate::error::SimError;
use crate::types::ScheduleEntry;

#[derive(Debug, Clone)]
pub struct TrafficSchedule {
    entries: Vec<ScheduleEntry>,
    index: usize,
}

impl TrafficSchedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Result<Self, SimError> {
        if entries.is_empty() {
            return Err(SimError::EmptySchedule);
        }
        Ok(Self { entries, index: 0 })
    }

    /// Entry whose rates the next interval will use.
    pub fn current_entry(&self) -> &ScheduleEntry {
        &self.entries[self.index]
    }

    pub fn current_timestamp(&self) -> &str {
        &self.current_entry().timestamp
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step to `(index + 1) mod len` and return the new current label.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.entries.len();
        self.current_timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slots() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry::new("t0", &[("A", 1)]),
            ScheduleEntry::new("t1", &[("A", 2)]),
        ]
    }

    #[test]
    fn empty_schedule_rejected() {
        assert_eq!(TrafficSchedule::new(Vec::new()).unwrap_err(), SimError::EmptySchedule);
    }

    #[test]
    fn advance_returns_next_label() {
        let mut schedule = TrafficSchedule::new(two_slots()).unwrap();
        assert_eq!(schedule.current_timestamp(), "t0");
        assert_eq!(schedule.advance(), "t1");
        assert_eq!(schedule.index(), 1);
        assert_eq!(schedule.advance(), "t0");
        assert_eq!(schedule.index(), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let entries: Vec<ScheduleEntry> = (0..7)
            .map(|i| ScheduleEntry::new(format!("slot-{i}"), &[("A", i)]))
            .collect();
        let mut schedule = TrafficSchedule::new(entries).unwrap();
        schedule.advance();
        schedule.advance();
        let start = schedule.index();
        for _ in 0..schedule.len() {
            schedule.advance();
        }
        assert_eq!(schedule.index(), start);
    }

    #[test]
    fn single_entry_stays_put() {
        let mut schedule =
            TrafficSchedule::new(vec![ScheduleEntry::new("only", &[("A", 3)])]).unwrap();
        assert_eq!(schedule.advance(), "only");
        assert_eq!(schedule.current_entry().total_demand(), 3);
    }
}
