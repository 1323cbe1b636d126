use chrono::NaiveDate;

use super::refresh::RefreshOutcome;

/// Transitions observed between two consecutive refreshes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTransition {
    pub target_changed: bool,
    pub celebration_started: bool,
}

/// Remembers the last refresh so the runner can react to changes once
/// instead of on every tick.
#[derive(Debug, Default)]
pub struct RefreshTracker {
    last_target: Option<NaiveDate>,
    last_elapsed: Option<bool>,
}

impl RefreshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, outcome: &RefreshOutcome) -> RefreshTransition {
        let elapsed = outcome.is_celebrating();
        let transition = RefreshTransition {
            target_changed: self.last_target != Some(outcome.target),
            celebration_started: elapsed && self.last_elapsed != Some(true),
        };
        self.last_target = Some(outcome.target);
        self.last_elapsed = Some(elapsed);
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::countdown::Countdown;

    fn outcome(target: (i32, u32, u32), countdown: Countdown) -> RefreshOutcome {
        RefreshOutcome {
            target: NaiveDate::from_ymd_opt(target.0, target.1, target.2).unwrap(),
            countdown,
            date_text: String::new(),
            countdown_text: String::new(),
            date_written: true,
            countdown_written: true,
        }
    }

    fn remaining(seconds: u32) -> Countdown {
        Countdown::Remaining {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds,
        }
    }

    #[test]
    fn first_observation_reports_target() {
        let mut tracker = RefreshTracker::new();
        let transition = tracker.observe(&outcome((2025, 1, 29), remaining(5)));
        assert!(transition.target_changed);
        assert!(!transition.celebration_started);

        let transition = tracker.observe(&outcome((2025, 1, 29), remaining(4)));
        assert_eq!(transition, RefreshTransition::default());
    }

    #[test]
    fn celebration_fires_once() {
        let mut tracker = RefreshTracker::new();
        tracker.observe(&outcome((2025, 1, 29), remaining(1)));

        let started = tracker.observe(&outcome((2025, 1, 29), Countdown::Elapsed));
        assert!(started.celebration_started);
        assert!(!started.target_changed);

        let still = tracker.observe(&outcome((2025, 1, 29), Countdown::Elapsed));
        assert!(!still.celebration_started);

        let rolled_over = tracker.observe(&outcome((2026, 2, 17), remaining(59)));
        assert!(rolled_over.target_changed);
        assert!(!rolled_over.celebration_started);
    }

    #[test]
    fn starting_on_the_day_celebrates_immediately() {
        let mut tracker = RefreshTracker::new();
        let transition = tracker.observe(&outcome((2025, 1, 29), Countdown::Elapsed));
        assert!(transition.celebration_started);
    }
}
