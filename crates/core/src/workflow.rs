//! Check-in workflow
//!
//! A submission is validated, checked against capacity, committed and then
//! answered with exactly one [`CheckInOutcome`]. The decision itself lives in
//! the pure [`apply_submission`]; [`CheckInDesk`] owns the state and adds
//! persistence and rendering around it.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::attendance::{append_attendee, compute_winners, increment_team};
use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{AttendanceState, AttendeeRecord, TeamId};
use crate::presentation::{self, PresentationSurface};
use crate::reconcile::{self, persist_state};
use crate::storage::{DurableStore, KeyValueStore};

pub const VALIDATION_MESSAGE: &str = "Please enter a name and select a team.";
pub const CAPACITY_MESSAGE: &str = "Capacity reached. Cannot check in more attendees.";

/// A raw check-in request as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission<'a> {
    pub name: &'a str,
    /// Team key, e.g. `"water"`
    pub team: &'a str,
}

impl<'a> Submission<'a> {
    pub fn new(name: &'a str, team: &'a str) -> Self {
        Self { name, team }
    }
}

/// Terminal result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Blank name or unknown team; nothing changed
    ValidationError,
    /// Already at capacity; nothing changed
    CapacityReached,
    /// This check-in filled the last seat
    GoalReached { winners: Vec<TeamId> },
    /// Ordinary successful check-in
    Welcome { name: String, team_label: String },
}

impl CheckInOutcome {
    /// Whether the submission was committed
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            CheckInOutcome::GoalReached { .. } | CheckInOutcome::Welcome { .. }
        )
    }

    /// User-facing message for this outcome
    pub fn message(&self) -> String {
        match self {
            CheckInOutcome::ValidationError => VALIDATION_MESSAGE.to_string(),
            CheckInOutcome::CapacityReached => CAPACITY_MESSAGE.to_string(),
            CheckInOutcome::GoalReached { winners } => goal_message(winners),
            CheckInOutcome::Welcome { name, team_label } => {
                format!("Welcome, {} from {}!", name, team_label)
            }
        }
    }
}

impl fmt::Display for CheckInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn goal_message(winners: &[TeamId]) -> String {
    match winners {
        [winner] => format!("🎉 Goal reached! Congratulations to {}!", winner.display_name()),
        _ => {
            let names: Vec<&str> = winners.iter().map(|t| t.display_name()).collect();
            format!("🎉 Goal reached! It's a tie between {}!", names.join(" and "))
        }
    }
}

/// Decide a submission against `state`, returning the next state and the
/// outcome. Rejections return the state unchanged.
pub fn apply_submission(
    mut state: AttendanceState,
    capacity: u32,
    submission: &Submission<'_>,
) -> (AttendanceState, CheckInOutcome) {
    let record = TeamId::from_key(submission.team)
        .and_then(|team| AttendeeRecord::new(submission.name, team));
    let Some(record) = record else {
        return (state, CheckInOutcome::ValidationError);
    };

    // A recovered team counter may already sit at the top of its range
    let team_full = record
        .team()
        .is_some_and(|team| state.team_counts.is_saturated(team));
    if state.is_full(capacity) || team_full {
        return (state, CheckInOutcome::CapacityReached);
    }

    state.total_count += 1;
    increment_team(&mut state.team_counts, record.team_key());
    let name = record.name().to_string();
    let team_label = record.team_label();
    append_attendee(&mut state.attendees, record);

    let outcome = if state.total_count == capacity {
        let winners = compute_winners(&state.team_counts);
        invariants::assert_winners_valid(&state.team_counts, &winners);
        CheckInOutcome::GoalReached { winners }
    } else {
        CheckInOutcome::Welcome { name, team_label }
    };

    (state, outcome)
}

/// Owner of the live attendance state for one session
pub struct CheckInDesk<S> {
    state: AttendanceState,
    store: DurableStore<S>,
    capacity: u32,
}

impl<S: KeyValueStore> CheckInDesk<S> {
    /// Wrap an already reconciled state
    pub fn new(store: DurableStore<S>, state: AttendanceState, capacity: u32) -> Self {
        Self {
            state,
            store,
            capacity,
        }
    }

    /// Reconcile from `store` and `surface`, render, and take ownership
    pub fn open<P>(store: S, surface: &mut P, capacity: u32) -> Self
    where
        P: PresentationSurface + ?Sized,
    {
        let store = DurableStore::new(store);
        let boot = reconcile::bootstrap(&store, surface, capacity);
        Self::new(store, boot.state, capacity)
    }

    pub fn state(&self) -> &AttendanceState {
        &self.state
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn store(&self) -> &DurableStore<S> {
        &self.store
    }

    /// Handle one submission end to end.
    ///
    /// On commit the full state is persisted before the outcome is reported.
    /// Rejections only refresh the message area.
    #[instrument(skip(self, submission, surface), fields(team = submission.team))]
    pub fn submit<P>(&mut self, submission: Submission<'_>, surface: &mut P) -> CheckInOutcome
    where
        P: PresentationSurface + ?Sized,
    {
        let before = std::mem::take(&mut self.state);
        let (after, outcome) = apply_submission(before.clone(), self.capacity, &submission);
        self.state = after;

        if outcome.is_committed() {
            invariants::assert_commit_delta(&before, &self.state);
            persist_state(&self.store, &self.state);

            if let Some(team) = TeamId::from_key(submission.team) {
                surface.render_team_count(team, self.state.team_counts.get(team));
            }
            presentation::project(&self.state, self.capacity, surface);

            debug!(total = self.state.total_count, "Check-in committed");
            if let CheckInOutcome::GoalReached { winners } = &outcome {
                info!(?winners, capacity = self.capacity, "Attendance goal reached");
            }
        } else {
            invariants::assert_unchanged(&before, &self.state);
            debug!(?outcome, "Check-in rejected");
        }

        surface.render_message(&outcome.message());
        outcome
    }

    /// Administrative absolute override of the total.
    ///
    /// Bypasses validation and capacity and leaves team counts and roster
    /// alone, so the total may drift from the team sum.
    pub fn set_count<P>(&mut self, count: i64, surface: &mut P) -> Result<u32>
    where
        P: PresentationSurface + ?Sized,
    {
        let count = u32::try_from(count).map_err(|_| Error::InvalidCount(count))?;
        self.override_total(count, surface);
        Ok(count)
    }

    /// Administrative increment of the total.
    ///
    /// A missing or zero step counts as one. Negative steps are applied and
    /// stop at zero. Same drift caveat as [`CheckInDesk::set_count`].
    pub fn increment_count<P>(&mut self, step: Option<i64>, surface: &mut P) -> u32
    where
        P: PresentationSurface + ?Sized,
    {
        let step = match step {
            None | Some(0) => 1,
            Some(step) => step,
        };
        let next = i64::from(self.state.total_count)
            .saturating_add(step)
            .clamp(0, i64::from(u32::MAX)) as u32;
        self.override_total(next, surface);
        next
    }

    fn override_total<P>(&mut self, total: u32, surface: &mut P)
    where
        P: PresentationSurface + ?Sized,
    {
        self.state.total_count = total;
        persist_state(&self.store, &self.state);
        presentation::project(&self.state, self.capacity, surface);

        let drift = invariants::team_drift(&self.state);
        if drift != 0 {
            debug!(total, drift, "Total overridden away from team sum");
        }
    }

    /// Re-render everything from the model
    pub fn refresh<P>(&self, surface: &mut P)
    where
        P: PresentationSurface + ?Sized,
    {
        presentation::project_team_counts(&self.state, surface);
        presentation::project(&self.state, self.capacity, surface);
    }
}
