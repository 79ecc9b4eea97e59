use crate::domain::change::ChangeRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub last_seen: ChangeRecord,
}

/// Decides which fetched change records are worth a notification.
///
/// Comparison is on the full raw text, so a pending change that later shows up
/// submitted (marker gone) counts as new and is reported once. Two distinct
/// events that print identical text are indistinguishable and the second one
/// is dropped.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    state: TrackerState,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: TrackerState) -> Self {
        Self { state }
    }

    pub fn into_state(self) -> TrackerState {
        self.state
    }

    pub fn last_seen(&self) -> &ChangeRecord {
        &self.state.last_seen
    }

    /// Records `current` and returns it when it should be forwarded.
    ///
    /// `last_seen` is updated before the pending check, so a pending record is
    /// remembered even though it is never returned.
    pub fn observe(&mut self, current: ChangeRecord) -> Option<ChangeRecord> {
        if current == self.state.last_seen {
            return None;
        }
        self.state.last_seen = current.clone();

        if current.is_pending() {
            None
        } else {
            Some(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING: &str = "Change 101 by alice *pending*";
    const SUBMITTED: &str = "Change 101 by alice";

    #[test]
    fn pending_then_submitted_then_repeat() {
        let mut tracker = ChangeTracker::new();

        assert_eq!(tracker.observe(PENDING.into()), None);
        assert_eq!(tracker.last_seen().as_str(), PENDING);

        assert_eq!(tracker.observe(SUBMITTED.into()), Some(SUBMITTED.into()));
        assert_eq!(tracker.last_seen().as_str(), SUBMITTED);

        assert_eq!(tracker.observe(SUBMITTED.into()), None);
        assert_eq!(tracker.last_seen().as_str(), SUBMITTED);
    }

    #[test]
    fn notifies_first_occurrence_only() {
        let mut tracker = ChangeTracker::new();
        assert_eq!(tracker.observe(SUBMITTED.into()), Some(SUBMITTED.into()));
        for _ in 0..5 {
            assert_eq!(tracker.observe(SUBMITTED.into()), None);
        }
    }

    #[test]
    fn pending_never_notifies() {
        let mut tracker = ChangeTracker::with_state(TrackerState {
            last_seen: "Change 100 by bob".into(),
        });
        assert_eq!(tracker.observe(PENDING.into()), None);
        assert_eq!(tracker.observe("Change 102 by carol *pending*".into()), None);
        assert_eq!(tracker.observe(PENDING.into()), None);
        assert_eq!(tracker.into_state().last_seen.as_str(), PENDING);
    }

    #[test]
    fn returning_to_an_older_text_counts_as_new() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.observe("Change 1".into()).is_some());
        assert!(tracker.observe("Change 2".into()).is_some());
        assert_eq!(tracker.observe("Change 1".into()), Some("Change 1".into()));
    }

    #[test]
    fn empty_output_matches_fresh_state() {
        let mut tracker = ChangeTracker::new();
        assert_eq!(tracker.observe(ChangeRecord::default()), None);
        assert_eq!(tracker.into_state(), TrackerState::default());
    }

    #[test]
    fn state_survives_handoff() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.observe(SUBMITTED.into()).is_some());

        let mut resumed = ChangeTracker::with_state(tracker.into_state());
        assert_eq!(resumed.observe(SUBMITTED.into()), None);

        let mut fresh = ChangeTracker::with_state(TrackerState::default());
        assert_eq!(fresh.observe(SUBMITTED.into()), Some(SUBMITTED.into()));
    }
}
