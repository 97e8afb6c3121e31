//! Attendance state model

use serde::{Deserialize, Serialize};

use super::{AttendeeRecord, TeamId};

/// Default ceiling on check-ins
pub const DEFAULT_CAPACITY: u32 = 50;

/// One counter per team, kept in enumeration order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCounts([u32; 3]);

impl TeamCounts {
    pub fn new(water: u32, zero: u32, power: u32) -> Self {
        Self([water, zero, power])
    }

    pub fn get(&self, team: TeamId) -> u32 {
        self.0[team.index()]
    }

    pub fn set(&mut self, team: TeamId, count: u32) {
        self.0[team.index()] = count;
    }

    /// Increment a team counter, returning the new value
    pub fn increment(&mut self, team: TeamId) -> u32 {
        let slot = &mut self.0[team.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Whether the counter for `team` cannot take another check-in
    pub fn is_saturated(&self, team: TeamId) -> bool {
        self.get(team) == u32::MAX
    }

    /// Sum across all teams
    pub fn total(&self) -> u64 {
        self.0.iter().map(|c| u64::from(*c)).sum()
    }

    /// Iterate (team, count) in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, u32)> + '_ {
        TeamId::all().iter().map(move |team| (*team, self.get(*team)))
    }
}

/// Authoritative in-memory model of attendance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceState {
    pub total_count: u32,
    pub team_counts: TeamCounts,
    /// Insertion order is display order
    pub attendees: Vec<AttendeeRecord>,
}

impl AttendanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another check-in would exceed `capacity`
    pub fn is_full(&self, capacity: u32) -> bool {
        self.total_count >= capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_counts_iteration_order() {
        let counts = TeamCounts::new(3, 1, 2);
        let seen: Vec<(TeamId, u32)> = counts.iter().collect();
        assert_eq!(
            seen,
            vec![(TeamId::Water, 3), (TeamId::Zero, 1), (TeamId::Power, 2)]
        );
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_increment() {
        let mut counts = TeamCounts::default();
        assert_eq!(counts.increment(TeamId::Zero), 1);
        assert_eq!(counts.increment(TeamId::Zero), 2);
        assert_eq!(counts.get(TeamId::Zero), 2);
        assert_eq!(counts.get(TeamId::Water), 0);
    }

    #[test]
    fn test_saturated_counter() {
        let mut counts = TeamCounts::new(u32::MAX, 0, 0);
        assert!(counts.is_saturated(TeamId::Water));
        assert!(!counts.is_saturated(TeamId::Zero));
        assert_eq!(counts.increment(TeamId::Water), u32::MAX);
    }

    #[test]
    fn test_is_full() {
        let mut state = AttendanceState::new();
        state.total_count = 49;
        assert!(!state.is_full(50));
        state.total_count = 50;
        assert!(state.is_full(50));
    }
}
