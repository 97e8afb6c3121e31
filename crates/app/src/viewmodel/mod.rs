//! View model bindings for the terminal UI

mod admin;
mod checkin;
mod command;

use std::io::{self, Write};

use checkin_core::{CheckInDesk, KeyValueStore, TeamId};

use crate::terminal::TerminalSurface;

pub use command::{parse, Command, USAGE};

/// Whether the input loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one input line and redraw the display
pub fn handle_line<S, W>(
    desk: &mut CheckInDesk<S>,
    surface: &mut TerminalSurface<W>,
    line: &str,
) -> io::Result<Flow>
where
    S: KeyValueStore,
    W: Write,
{
    match parse(line) {
        Command::CheckIn { team, name } => {
            checkin::check_in(desk, surface, &team, &name);
        }
        Command::Set(count) => admin::set_count(desk, surface, count),
        Command::Increment(step) => admin::increment_count(desk, surface, step),
        Command::Status => desk.refresh(surface),
        Command::Teams => {
            for team in TeamId::all() {
                surface.note(&format!("  {:<6} {}", team.key(), team.label()))?;
            }
            return Ok(Flow::Continue);
        }
        Command::Help => {
            surface.note(USAGE)?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
        Command::Empty => return Ok(Flow::Continue),
        Command::Invalid(hint) => {
            surface.note(&hint)?;
            return Ok(Flow::Continue);
        }
    }

    surface.draw()?;
    Ok(Flow::Continue)
}
