//! Attendee record model

use serde::{Deserialize, Serialize};

use super::TeamId;

/// A single checked-in attendee.
///
/// The team is kept as its raw key so a roster persisted with a key that is
/// no longer recognised still loads (and renders as the unknown sentinel).
/// New records can only be created from a valid [`TeamId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    name: String,
    team: String,
}

impl AttendeeRecord {
    /// Build a record from a submitted name. Returns `None` when the name is
    /// empty after trimming.
    pub fn new(name: &str, team: TeamId) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            team: team.key().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_key(&self) -> &str {
        &self.team
    }

    /// Resolved team, if the stored key is still valid
    pub fn team(&self) -> Option<TeamId> {
        TeamId::from_key(&self.team)
    }

    pub fn team_label(&self) -> String {
        TeamId::label_for_key(&self.team)
    }
}
