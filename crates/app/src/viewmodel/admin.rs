//! Administrative count overrides

use checkin_core::{CheckInDesk, KeyValueStore, PresentationSurface};

/// Override the total; invalid values leave the count alone and say why
pub fn set_count<S, P>(desk: &mut CheckInDesk<S>, surface: &mut P, count: i64)
where
    S: KeyValueStore,
    P: PresentationSurface + ?Sized,
{
    match desk.set_count(count, surface) {
        Ok(total) => {
            tracing::info!(total, "Attendee count overridden");
            surface.render_message(&format!("Attendee count set to {}.", total));
        }
        Err(e) => {
            tracing::warn!(count, error = %e, "Rejected attendee count override");
            surface.render_message(&e.to_string());
        }
    }
}

pub fn increment_count<S, P>(desk: &mut CheckInDesk<S>, surface: &mut P, step: Option<i64>)
where
    S: KeyValueStore,
    P: PresentationSurface + ?Sized,
{
    let total = desk.increment_count(step, surface);
    tracing::info!(total, ?step, "Attendee count incremented");
    surface.render_message(&format!("Attendee count is now {}.", total));
}
