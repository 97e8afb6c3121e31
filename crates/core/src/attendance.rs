//! Derived attendance computations
//!
//! Pure functions over the attendance model: progress, team tallies and the
//! leaderboard used when the goal is reached.

use tracing::warn;

use crate::models::{AttendeeRecord, TeamCounts, TeamId};

/// Progress toward `capacity` as a whole percentage in `[0, 100]`.
///
/// Rounds half up and clamps at 100 even if `total` overshoots. A zero
/// capacity is always full.
pub fn compute_percentage(total: u32, capacity: u32) -> u8 {
    if capacity == 0 {
        return 100;
    }
    let total = u64::from(total);
    let capacity = u64::from(capacity);
    let percent = (200 * total + capacity) / (2 * capacity);
    percent.min(100) as u8
}

/// Increment the counter for `team_key`.
///
/// Unknown keys leave the counts untouched and return `false`; they point at
/// an upstream data bug but must never abort a check-in.
pub fn increment_team(team_counts: &mut TeamCounts, team_key: &str) -> bool {
    match TeamId::from_key(team_key) {
        Some(team) => {
            team_counts.increment(team);
            true
        }
        None => {
            warn!(team = team_key, "Ignoring increment for unknown team");
            false
        }
    }
}

/// Teams sharing the highest count, in enumeration order.
///
/// Always computed from the counts passed in; an all-zero tally is a full
/// tie.
pub fn compute_winners(team_counts: &TeamCounts) -> Vec<TeamId> {
    let max = team_counts.iter().map(|(_, c)| c).max().unwrap_or(0);
    team_counts
        .iter()
        .filter(|(_, c)| *c == max)
        .map(|(team, _)| team)
        .collect()
}

/// Append a record to the roster. No deduplication, no reordering.
pub fn append_attendee(roster: &mut Vec<AttendeeRecord>, record: AttendeeRecord) {
    roster.push(record);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(compute_percentage(0, 50), 0);
        assert_eq!(compute_percentage(1, 50), 2);
        assert_eq!(compute_percentage(25, 50), 50);
        assert_eq!(compute_percentage(50, 50), 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(compute_percentage(1, 8), 13);
        // 1/3 = 33.3%
        assert_eq!(compute_percentage(1, 3), 33);
        // 2/3 = 66.7%
        assert_eq!(compute_percentage(2, 3), 67);
    }

    #[test]
    fn test_percentage_clamped() {
        assert_eq!(compute_percentage(75, 50), 100);
        assert_eq!(compute_percentage(u32::MAX, 50), 100);
        assert_eq!(compute_percentage(3, 0), 100);
    }

    #[test]
    fn test_increment_team() {
        let mut counts = TeamCounts::default();
        assert!(increment_team(&mut counts, "water"));
        assert!(increment_team(&mut counts, "water"));
        assert!(increment_team(&mut counts, "power"));
        assert_eq!(counts, TeamCounts::new(2, 0, 1));
    }

    #[test]
    fn test_increment_unknown_team_is_noop() {
        let mut counts = TeamCounts::new(1, 2, 3);
        assert!(!increment_team(&mut counts, "fire"));
        assert!(!increment_team(&mut counts, ""));
        assert_eq!(counts, TeamCounts::new(1, 2, 3));
    }

    #[test]
    fn test_winners_full_tie_at_zero() {
        let winners = compute_winners(&TeamCounts::new(0, 0, 0));
        assert_eq!(winners, vec![TeamId::Water, TeamId::Zero, TeamId::Power]);
    }

    #[test]
    fn test_winners_two_way_tie() {
        let winners = compute_winners(&TeamCounts::new(5, 3, 5));
        assert_eq!(winners, vec![TeamId::Water, TeamId::Power]);
    }

    #[test]
    fn test_single_winner() {
        let winners = compute_winners(&TeamCounts::new(1, 7, 4));
        assert_eq!(winners, vec![TeamId::Zero]);
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut roster = Vec::new();
        let ada = AttendeeRecord::new("Ada", TeamId::Power).unwrap();
        let grace = AttendeeRecord::new("Grace", TeamId::Water).unwrap();

        append_attendee(&mut roster, ada.clone());
        append_attendee(&mut roster, grace.clone());
        append_attendee(&mut roster, ada.clone());

        assert_eq!(roster, vec![ada.clone(), grace, ada]);
    }
}
