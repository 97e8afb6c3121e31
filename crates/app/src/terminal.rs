//! Terminal presentation surface
//!
//! Renders are buffered into node state like a page would hold them; `draw`
//! writes one frame of the whole display to the output.

use std::io::{self, Write};

use checkin_core::presentation::ROSTER_TITLE;
use checkin_core::{PresentationSurface, RosterEntry, TeamId};

const BAR_WIDTH: usize = 20;

pub struct TerminalSurface<W: Write> {
    out: W,
    capacity: u32,
    total: String,
    progress: u8,
    team_counts: [String; 3],
    message: String,
    roster: Option<Vec<RosterEntry>>,
}

impl<W: Write> TerminalSurface<W> {
    /// A fresh surface shows zero everywhere and has no roster yet
    pub fn new(out: W, capacity: u32) -> Self {
        Self {
            out,
            capacity,
            total: "0".to_string(),
            progress: 0,
            team_counts: ["0".to_string(), "0".to_string(), "0".to_string()],
            message: String::new(),
            roster: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn progress_bar(&self) -> String {
        let filled = usize::from(self.progress) * BAR_WIDTH / 100;
        format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }

    /// Write the full display
    pub fn draw(&mut self) -> io::Result<()> {
        let bar = self.progress_bar();
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Check-ins: {} / {}  {} {}%",
            self.total, self.capacity, bar, self.progress
        )?;

        let teams: Vec<String> = TeamId::all()
            .iter()
            .map(|team| format!("{}: {}", team.label(), self.team_counts[team.index()]))
            .collect();
        writeln!(self.out, "{}", teams.join("   "))?;

        if let Some(roster) = &self.roster {
            writeln!(self.out, "{}", ROSTER_TITLE)?;
            for (i, entry) in roster.iter().enumerate() {
                writeln!(self.out, "  {}. {}", i + 1, entry)?;
            }
        }

        if !self.message.is_empty() {
            writeln!(self.out, "> {}", self.message)?;
        }
        self.out.flush()
    }

    /// Write a single line outside the frame (help text, listings)
    pub fn note(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> PresentationSurface for TerminalSurface<W> {
    fn displayed_total(&self) -> Option<String> {
        Some(self.total.clone())
    }

    fn displayed_team_count(&self, team: TeamId) -> Option<String> {
        Some(self.team_counts[team.index()].clone())
    }

    fn render_total(&mut self, total: u32) {
        self.total = total.to_string();
    }

    fn render_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    fn render_team_count(&mut self, team: TeamId, count: u32) {
        self.team_counts[team.index()] = count.to_string();
    }

    fn render_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn ensure_roster(&mut self) -> bool {
        self.roster.get_or_insert_with(Vec::new);
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
