//! Transition scheduling.
//!
//! The deck allows at most one eased transition in flight. Its completion is
//! a stored deadline fired by [`AnimationScheduler::tick`], not a timer
//! callback, so the embedder's event loop stays the single source of time.
//! Scheduling a new completion replaces the pending one, which makes a
//! superseded transition's completion impossible to fire late.

use std::time::{Duration, Instant};

/// What the engine should do once an eased transition finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Continuation {
    /// Refresh controls only; used for snap-back and resize re-settles.
    Resettle,
    /// Commit a single-step navigation: refresh controls, emit an update.
    CommitStep,
    /// Second phase of a teleport: assign the target's neighbors, move the
    /// current index, refresh controls, emit an update.
    TeleportArrive {
        /// Index the teleport lands on.
        target: usize,
    },
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    deadline: Instant,
    continuation: Continuation,
}

/// Deadline-based completion tracking for eased transitions.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AnimationScheduler {
    pending: Option<Pending>,
}

impl AnimationScheduler {
    /// Starts tracking a transition of `duration` seconds.
    ///
    /// A non-positive duration means the transform was applied instantly;
    /// the continuation is handed back for synchronous execution and the
    /// scheduler stays idle.
    pub(crate) fn begin(
        &mut self,
        now: Instant,
        duration: f32,
        continuation: Continuation,
    ) -> Option<Continuation> {
        if duration <= 0.0 {
            return Some(continuation);
        }
        self.pending = Some(Pending {
            deadline: now + Duration::from_secs_f32(duration),
            continuation,
        });
        None
    }

    /// Fires the pending completion if its deadline has passed.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Continuation> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.continuation)
    }

    /// Whether a transition is in flight.
    pub(crate) fn is_animating(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_fires_only_after_deadline() {
        let mut scheduler = AnimationScheduler::default();
        let now = Instant::now();
        assert_eq!(scheduler.begin(now, 0.2, Continuation::CommitStep), None);
        assert!(scheduler.is_animating());

        assert_eq!(scheduler.tick(now + Duration::from_millis(100)), None);
        assert!(scheduler.is_animating());

        assert_eq!(
            scheduler.tick(now + Duration::from_millis(200)),
            Some(Continuation::CommitStep)
        );
        assert!(!scheduler.is_animating());
        // Completion fires once.
        assert_eq!(scheduler.tick(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_zero_duration_runs_synchronously() {
        let mut scheduler = AnimationScheduler::default();
        let now = Instant::now();
        assert_eq!(
            scheduler.begin(now, 0.0, Continuation::Resettle),
            Some(Continuation::Resettle)
        );
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_new_transition_replaces_pending_completion() {
        let mut scheduler = AnimationScheduler::default();
        let now = Instant::now();
        scheduler.begin(now, 0.2, Continuation::CommitStep);
        scheduler.begin(now, 0.5, Continuation::TeleportArrive { target: 3 });

        // The superseded completion never fires.
        assert_eq!(scheduler.tick(now + Duration::from_millis(300)), None);
        assert_eq!(
            scheduler.tick(now + Duration::from_millis(500)),
            Some(Continuation::TeleportArrive { target: 3 })
        );
    }
}
