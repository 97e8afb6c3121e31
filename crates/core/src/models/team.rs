//! Team model - the fixed set of affiliations an attendee can check in with

use serde::{Deserialize, Serialize};

/// Label shown for a team key outside the known set
pub const UNKNOWN_TEAM_LABEL: &str = "Unknown Team";

/// Teams in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    Water,
    Zero,
    Power,
}

impl TeamId {
    /// All teams in enumeration order
    pub fn all() -> &'static [TeamId] {
        &[TeamId::Water, TeamId::Zero, TeamId::Power]
    }

    /// Position within the enumeration
    pub fn index(&self) -> usize {
        match self {
            TeamId::Water => 0,
            TeamId::Zero => 1,
            TeamId::Power => 2,
        }
    }

    /// Key used in submissions and persisted records
    pub fn key(&self) -> &'static str {
        match self {
            TeamId::Water => "water",
            TeamId::Zero => "zero",
            TeamId::Power => "power",
        }
    }

    /// Resolve a submitted key. Only exact keys are valid.
    pub fn from_key(key: &str) -> Option<TeamId> {
        match key {
            "water" => Some(TeamId::Water),
            "zero" => Some(TeamId::Zero),
            "power" => Some(TeamId::Power),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TeamId::Water => "Team Water Wise",
            TeamId::Zero => "Team Net Zero",
            TeamId::Power => "Team Renewables",
        }
    }

    /// Decorative marker shown in front of the name
    pub fn marker(&self) -> &'static str {
        match self {
            TeamId::Water => "🌊",
            TeamId::Zero => "🌿",
            TeamId::Power => "⚡",
        }
    }

    /// Marker and name, e.g. "🌊 Team Water Wise"
    pub fn label(&self) -> String {
        format!("{} {}", self.marker(), self.display_name())
    }

    /// Label for any key, falling back to the unknown sentinel
    pub fn label_for_key(key: &str) -> String {
        match TeamId::from_key(key) {
            Some(team) => team.label(),
            None => UNKNOWN_TEAM_LABEL.to_string(),
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
