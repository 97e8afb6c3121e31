//! Check-in Core Library
//!
//! Attendance model, durable storage, bootstrap reconciliation, the check-in
//! workflow and presentation sync for the event check-in desk.

pub mod attendance;
pub mod config;
pub mod error;
pub mod invariants;
pub mod models;
pub mod presentation;
pub mod reconcile;
pub mod storage;
pub mod workflow;

pub use config::CheckInConfig;
pub use error::{Error, Result};
pub use models::*;
pub use presentation::{MemorySurface, PresentationSurface, RosterEntry};
pub use reconcile::{Bootstrap, Source};
pub use storage::{Database, DurableStore, KeyValueStore, MemoryStore};
pub use workflow::{CheckInDesk, CheckInOutcome, Submission};
