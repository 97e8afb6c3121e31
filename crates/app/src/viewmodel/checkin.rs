//! Check-in view model

use checkin_core::{CheckInDesk, CheckInOutcome, KeyValueStore, PresentationSurface, Submission};

/// Submit a check-in and return the outcome shown to the user
pub fn check_in<S, P>(
    desk: &mut CheckInDesk<S>,
    surface: &mut P,
    team: &str,
    name: &str,
) -> CheckInOutcome
where
    S: KeyValueStore,
    P: PresentationSurface + ?Sized,
{
    let outcome = desk.submit(Submission::new(name, team), surface);
    if let CheckInOutcome::GoalReached { .. } = outcome {
        tracing::info!(total = desk.state().total_count, "Event is full");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::{MemoryStore, MemorySurface, TeamId};

    #[test]
    fn test_check_in_through_view_model() {
        let mut surface = MemorySurface::new();
        let mut desk = CheckInDesk::open(MemoryStore::new(), &mut surface, 2);

        let first = check_in(&mut desk, &mut surface, "zero", "Grace");
        assert!(matches!(first, CheckInOutcome::Welcome { .. }));

        let second = check_in(&mut desk, &mut surface, "zero", "Ada");
        assert_eq!(
            second,
            CheckInOutcome::GoalReached {
                winners: vec![TeamId::Zero]
            }
        );

        let third = check_in(&mut desk, &mut surface, "water", "Linus");
        assert_eq!(third, CheckInOutcome::CapacityReached);
    }
}
