//! Developer guardrails and invariants
//!
//! Consistency checks for the attendance model. [`check`] reports without
//! panicking, since recovered or overridden state may legitimately drift.
//! The `assert_*` helpers are debug assertions for states that cannot occur
//! and are compiled out in release builds.

use crate::models::{AttendanceState, TeamCounts};

/// Result of checking the count invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantReport {
    /// `total_count == sum(team_counts)`
    pub total_matches_teams: bool,
    /// `total_count == attendees.len()`
    pub total_matches_roster: bool,
    /// `total_count <= capacity`
    pub within_capacity: bool,
}

impl InvariantReport {
    pub fn is_consistent(&self) -> bool {
        self.total_matches_teams && self.total_matches_roster && self.within_capacity
    }
}

/// Check the count invariants of `state`
pub fn check(state: &AttendanceState, capacity: u32) -> InvariantReport {
    let total = u64::from(state.total_count);
    InvariantReport {
        total_matches_teams: total == state.team_counts.total(),
        total_matches_roster: total == state.attendees.len() as u64,
        within_capacity: state.total_count <= capacity,
    }
}

/// Signed difference between the total and the team sum
pub fn team_drift(state: &AttendanceState) -> i64 {
    i64::from(state.total_count) - state.team_counts.total() as i64
}

/// Validate that a commit moved every counter by exactly one
pub fn assert_commit_delta(before: &AttendanceState, after: &AttendanceState) {
    debug_assert_eq!(
        u64::from(after.total_count),
        u64::from(before.total_count) + 1,
        "Commit must increase the total by one"
    );

    debug_assert_eq!(
        after.team_counts.total(),
        before.team_counts.total() + 1,
        "Commit must increase exactly one team counter by one"
    );

    debug_assert_eq!(
        after.attendees.len(),
        before.attendees.len() + 1,
        "Commit must append exactly one attendee"
    );

    debug_assert!(
        after.attendees.starts_with(&before.attendees),
        "Commit must not reorder or rewrite the roster"
    );
}

/// Validate that a rejected submission left the state untouched
pub fn assert_unchanged(before: &AttendanceState, after: &AttendanceState) {
    debug_assert_eq!(before, after, "Rejected submission mutated the state");
}

/// Validate that winners are drawn from the current maximum
pub fn assert_winners_valid(counts: &TeamCounts, winners: &[crate::models::TeamId]) {
    let max = counts.iter().map(|(_, c)| c).max().unwrap_or(0);
    debug_assert!(!winners.is_empty(), "A goal must have at least one winner");
    debug_assert!(
        winners.iter().all(|team| counts.get(*team) == max),
        "Winner list {:?} does not match maximum count {}",
        winners,
        max
    );
}
