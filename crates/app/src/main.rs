//! Check-in - event check-in desk
//!
//! A terminal front end for the check-in engine. State is kept in a SQLite
//! database under the platform data directory and restored on start.

use std::io::{self, BufRead};

use checkin_core::CheckInDesk;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod terminal;
mod viewmodel;

use terminal::TerminalSurface;
use viewmodel::Flow;

fn main() {
    // Initialize logging; stdout belongs to the display
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting check-in desk");

    let app_state = match state::AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        data_dir = %app_state.data_dir().display(),
        config_dir = %app_state.config_dir().display(),
        capacity = app_state.config.capacity,
        "Configuration loaded"
    );

    let db = match app_state.open_database() {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let capacity = app_state.config.capacity;
    let mut surface = TerminalSurface::new(io::stdout(), capacity);
    let mut desk = CheckInDesk::open(db, &mut surface, capacity);

    if let Err(e) = run(&mut desk, &mut surface) {
        tracing::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!(total = desk.state().total_count, "Check-in desk closed");
}

fn run<S, W>(desk: &mut CheckInDesk<S>, surface: &mut TerminalSurface<W>) -> io::Result<()>
where
    S: checkin_core::KeyValueStore,
    W: io::Write,
{
    surface.draw()?;
    surface.note("Type 'help' for commands.")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if viewmodel::handle_line(desk, surface, &line?)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
