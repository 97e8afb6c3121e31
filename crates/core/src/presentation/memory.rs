//! In-memory presentation surface
//!
//! Each node is `None` when absent and `Some(text)` when present. Renders
//! aimed at an absent node are dropped.

use super::{PresentationSurface, RosterEntry};
use crate::models::TeamId;

#[derive(Debug, Clone)]
pub struct MemorySurface {
    pub total: Option<String>,
    pub progress: Option<u8>,
    pub team_counts: [Option<String>; 3],
    pub message: Option<String>,
    /// Roster list, created on first render when an anchor exists
    pub roster: Option<Vec<RosterEntry>>,
    pub roster_anchor: bool,
    /// How many times the roster list was created
    pub roster_created: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Surface with every node present and counters showing "0"
    pub fn new() -> Self {
        Self {
            total: Some("0".to_string()),
            progress: Some(0),
            team_counts: [
                Some("0".to_string()),
                Some("0".to_string()),
                Some("0".to_string()),
            ],
            message: Some(String::new()),
            roster: None,
            roster_anchor: true,
            roster_created: 0,
        }
    }

    /// Surface with no nodes at all
    pub fn bare() -> Self {
        Self {
            total: None,
            progress: None,
            team_counts: [None, None, None],
            message: None,
            roster: None,
            roster_anchor: false,
            roster_created: 0,
        }
    }

    /// Pre-render the total counter with `text`
    pub fn with_total(mut self, text: &str) -> Self {
        self.total = Some(text.to_string());
        self
    }

    /// Pre-render a team counter with `text`
    pub fn with_team_count(mut self, team: TeamId, text: &str) -> Self {
        self.team_counts[team.index()] = Some(text.to_string());
        self
    }

    pub fn without_team_count(mut self, team: TeamId) -> Self {
        self.team_counts[team.index()] = None;
        self
    }

    pub fn without_roster_anchor(mut self) -> Self {
        self.roster_anchor = false;
        self
    }

    /// Rendered roster lines, empty when no roster exists
    pub fn roster_lines(&self) -> Vec<String> {
        self.roster
            .as_ref()
            .map(|entries| entries.iter().map(|e| e.to_string()).collect())
            .unwrap_or_default()
    }
}

impl PresentationSurface for MemorySurface {
    fn displayed_total(&self) -> Option<String> {
        self.total.clone()
    }

    fn displayed_team_count(&self, team: TeamId) -> Option<String> {
        self.team_counts[team.index()].clone()
    }

    fn render_total(&mut self, total: u32) {
        if let Some(node) = self.total.as_mut() {
            *node = total.to_string();
        }
    }

    fn render_progress(&mut self, percent: u8) {
        if let Some(node) = self.progress.as_mut() {
            *node = percent.min(100);
        }
    }

    fn render_team_count(&mut self, team: TeamId, count: u32) {
        if let Some(node) = self.team_counts[team.index()].as_mut() {
            *node = count.to_string();
        }
    }

    fn render_message(&mut self, message: &str) {
        if let Some(node) = self.message.as_mut() {
            *node = message.to_string();
        }
    }

    fn ensure_roster(&mut self) -> bool {
        if self.roster.is_some() {
            return true;
        }
        if !self.roster_anchor {
            return false;
        }
        self.roster = Some(Vec::new());
        self.roster_created += 1;
        true
    }

    fn clear_roster(&mut self) {
        if let Some(roster) = self.roster.as_mut() {
            roster.clear();
        }
    }

    fn append_roster_entry(&mut self, entry: RosterEntry) {
        if let Some(roster) = self.roster.as_mut() {
            roster.push(entry);
        }
    }
}
