//! Presentation sync
//!
//! One-way projection of [`AttendanceState`] onto a [`PresentationSurface`].
//! After bootstrap the surface is never read back as a source of truth.

mod memory;

use std::fmt;

use tracing::debug;

use crate::attendance::compute_percentage;
use crate::models::{AttendanceState, AttendeeRecord, TeamId};

pub use memory::MemorySurface;

/// Title of the roster section created when the surface has none
pub const ROSTER_TITLE: &str = "Attendees";

/// One rendered roster line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub team_label: String,
}

impl From<&AttendeeRecord> for RosterEntry {
    fn from(record: &AttendeeRecord) -> Self {
        Self {
            name: record.name().to_string(),
            team_label: record.team_label(),
        }
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.name, self.team_label)
    }
}

/// Hosting surface for the check-in display.
///
/// Any node may be missing; implementations silently ignore renders aimed at
/// a node they do not have.
pub trait PresentationSurface {
    /// Text currently shown in the total counter, if any
    fn displayed_total(&self) -> Option<String>;

    /// Text currently shown in a team counter, if any
    fn displayed_team_count(&self, team: TeamId) -> Option<String>;

    fn render_total(&mut self, total: u32);

    /// Progress bar fill, as a percentage in `[0, 100]`
    fn render_progress(&mut self, percent: u8);

    fn render_team_count(&mut self, team: TeamId, count: u32);

    fn render_message(&mut self, message: &str);

    /// Make sure a roster list exists, creating it after the anchor if
    /// needed. Returns `false` when there is nowhere to put one.
    fn ensure_roster(&mut self) -> bool;

    fn clear_roster(&mut self);

    fn append_roster_entry(&mut self, entry: RosterEntry);
}

/// Render the total, the progress fill and a freshly rebuilt roster.
///
/// Team counters are not touched here; they are rendered by bootstrap and by
/// the check-in commit. Safe to call any number of times.
pub fn project<P: PresentationSurface + ?Sized>(
    state: &AttendanceState,
    capacity: u32,
    surface: &mut P,
) {
    surface.render_total(state.total_count);
    surface.render_progress(compute_percentage(state.total_count, capacity));
    render_roster(&state.attendees, surface);
}

/// Render every team counter from the model
pub fn project_team_counts<P: PresentationSurface + ?Sized>(
    state: &AttendanceState,
    surface: &mut P,
) {
    for (team, count) in state.team_counts.iter() {
        surface.render_team_count(team, count);
    }
}

fn render_roster<P: PresentationSurface + ?Sized>(roster: &[AttendeeRecord], surface: &mut P) {
    if !surface.ensure_roster() {
        debug!("No roster anchor on surface, skipping roster render");
        return;
    }
    surface.clear_roster();
    for record in roster {
        surface.append_roster_entry(RosterEntry::from(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamCounts;

    fn sample_state() -> AttendanceState {
        AttendanceState {
            total_count: 2,
            team_counts: TeamCounts::new(1, 0, 1),
            attendees: vec![
                AttendeeRecord::new("Ada", TeamId::Power).unwrap(),
                AttendeeRecord::new("Grace", TeamId::Water).unwrap(),
            ],
        }
    }

    #[test]
    fn test_project_renders_total_progress_roster() {
        let mut surface = MemorySurface::new();
        project(&sample_state(), 50, &mut surface);

        assert_eq!(surface.total.as_deref(), Some("2"));
        assert_eq!(surface.progress, Some(4));
        assert_eq!(
            surface.roster_lines(),
            vec!["Ada – ⚡ Team Renewables", "Grace – 🌊 Team Water Wise"]
        );
    }

    #[test]
    fn test_project_is_idempotent() {
        let state = sample_state();
        let mut surface = MemorySurface::new();

        project(&state, 50, &mut surface);
        let first = surface.roster_lines();
        project(&state, 50, &mut surface);

        assert_eq!(surface.roster_lines(), first);
        assert_eq!(surface.roster_lines().len(), 2);
    }

    #[test]
    fn test_project_leaves_team_counters_alone() {
        let mut surface = MemorySurface::new();
        surface.render_team_count(TeamId::Water, 9);

        project(&sample_state(), 50, &mut surface);

        assert_eq!(surface.displayed_team_count(TeamId::Water).as_deref(), Some("9"));
    }

    #[test]
    fn test_project_without_roster_anchor() {
        let mut surface = MemorySurface::new().without_roster_anchor();
        project(&sample_state(), 50, &mut surface);

        assert_eq!(surface.total.as_deref(), Some("2"));
        assert!(surface.roster.is_none());
    }

    #[test]
    fn test_roster_created_once() {
        let mut surface = MemorySurface::new();
        assert!(surface.roster.is_none());

        project(&sample_state(), 50, &mut surface);
        project(&sample_state(), 50, &mut surface);

        assert_eq!(surface.roster_created, 1);
    }

    #[test]
    fn test_unknown_team_entry() {
        let record: AttendeeRecord =
            serde_json::from_str(r#"{"name":"Linus","team":"fire"}"#).unwrap();
        assert_eq!(RosterEntry::from(&record).to_string(), "Linus – Unknown Team");
    }

    #[test]
    fn test_project_team_counts() {
        let mut surface = MemorySurface::new();
        project_team_counts(&sample_state(), &mut surface);
        assert_eq!(surface.displayed_team_count(TeamId::Water).as_deref(), Some("1"));
        assert_eq!(surface.displayed_team_count(TeamId::Zero).as_deref(), Some("0"));
        assert_eq!(surface.displayed_team_count(TeamId::Power).as_deref(), Some("1"));
    }
}
