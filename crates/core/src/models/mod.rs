//! Data models for event check-in

mod attendee;
mod state;
mod team;

pub use attendee::*;
pub use state::*;
pub use team::*;
