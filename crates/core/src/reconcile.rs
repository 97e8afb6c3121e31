//! Bootstrap reconciliation
//!
//! Merges persisted values with whatever the presentation surface shows at
//! startup into one authoritative [`AttendanceState`].
//!
//! Precedence, applied independently to the total and to each team counter:
//!
//! 1. the persisted value, if it is a non-negative integer
//! 2. the value currently displayed, if it is a non-negative integer
//! 3. zero
//!
//! The roster only ever comes from storage. A persisted roster that is not a
//! JSON array of records is discarded and the roster starts empty.

use tracing::{info, instrument, warn};

use crate::invariants;
use crate::models::{AttendanceState, AttendeeRecord, TeamId};
use crate::presentation::{self, PresentationSurface};
use crate::storage::{keys, parse_non_negative, DurableStore, KeyValueStore};

/// Where a reconciled counter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Persisted,
    Displayed,
    Default,
}

/// A reconciled counter value and its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub value: u32,
    pub source: Source,
}

/// Apply the counter precedence to one persisted/displayed pair
pub fn resolve_counter(persisted: Option<i64>, displayed: Option<&str>) -> Resolved {
    if let Some(value) = persisted.and_then(|v| u32::try_from(v).ok()) {
        return Resolved {
            value,
            source: Source::Persisted,
        };
    }
    if let Some(value) = displayed.and_then(parse_non_negative) {
        return Resolved {
            value,
            source: Source::Displayed,
        };
    }
    Resolved {
        value: 0,
        source: Source::Default,
    }
}

/// Reconciled state together with the source of each counter
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub state: AttendanceState,
    pub total_source: Source,
    pub team_sources: [Source; 3],
    pub roster_recovered: bool,
}

impl Bootstrap {
    pub fn team_source(&self, team: TeamId) -> Source {
        self.team_sources[team.index()]
    }
}

/// Resolve the startup state without side effects
pub fn reconcile<S, P>(store: &DurableStore<S>, surface: &P) -> Bootstrap
where
    S: KeyValueStore,
    P: PresentationSurface + ?Sized,
{
    let total = resolve_counter(
        store.read_int(keys::TOTAL),
        surface.displayed_total().as_deref(),
    );

    let mut state = AttendanceState {
        total_count: total.value,
        ..AttendanceState::default()
    };

    let mut team_sources = [Source::Default; 3];
    for team in TeamId::all() {
        let resolved = resolve_counter(
            store.read_int(keys::team(*team)),
            surface.displayed_team_count(*team).as_deref(),
        );
        state.team_counts.set(*team, resolved.value);
        team_sources[team.index()] = resolved.source;
    }

    let roster: Option<Vec<AttendeeRecord>> = store.read_json(keys::ATTENDEES);
    let roster_recovered = roster.is_some();
    state.attendees = roster.unwrap_or_default();

    Bootstrap {
        state,
        total_source: total.source,
        team_sources,
        roster_recovered,
    }
}

/// Reconcile, render the result and write it back to storage.
///
/// Never fails: every unreadable input falls through the precedence chain.
#[instrument(skip(store, surface))]
pub fn bootstrap<S, P>(store: &DurableStore<S>, surface: &mut P, capacity: u32) -> Bootstrap
where
    S: KeyValueStore,
    P: PresentationSurface + ?Sized,
{
    let boot = reconcile(store, &*surface);

    presentation::project_team_counts(&boot.state, surface);
    presentation::project(&boot.state, capacity, surface);
    persist_state(store, &boot.state);

    let report = invariants::check(&boot.state, capacity);
    if !report.is_consistent() {
        warn!(
            total = boot.state.total_count,
            team_sum = boot.state.team_counts.total(),
            roster = boot.state.attendees.len(),
            ?report,
            "Recovered attendance state is inconsistent"
        );
    }

    info!(
        total = boot.state.total_count,
        total_source = ?boot.total_source,
        roster = boot.state.attendees.len(),
        roster_recovered = boot.roster_recovered,
        "Attendance state restored"
    );

    boot
}

/// Persist every counter and the roster. Best-effort.
pub(crate) fn persist_state<S: KeyValueStore>(store: &DurableStore<S>, state: &AttendanceState) {
    store.write_int(keys::TOTAL, i64::from(state.total_count));
    for (team, count) in state.team_counts.iter() {
        store.write_int(keys::team(team), i64::from(count));
    }
    store.write_json(keys::ATTENDEES, &state.attendees);
}
