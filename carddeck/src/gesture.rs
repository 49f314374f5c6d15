//! Swipe gesture tracking.
//!
//! Converts raw pointer samples into either a live-follow instruction or, at
//! release, the committed drag distance. Axis classification happens here:
//! a motion that is more vertical than horizontal is scroll intent and must
//! be left to the embedder.

/// Outcome of feeding one pointer-move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragAction {
    /// Vertical/scroll intent; the embedder must not suppress default
    /// handling.
    Ignore,
    /// Horizontal drag; render a transform proportional to `delta`.
    Follow {
        /// Horizontal displacement since the session started.
        delta: f32,
        /// Quantized fraction of the viewport covered, for supplementary
        /// feedback effects.
        progression: f32,
    },
}

/// Transient swipe session, alive between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    started: bool,
    start_x: f32,
    start_y: f32,
    last_x: f32,
}

impl GestureTracker {
    /// Opens a session at the given point.
    ///
    /// `last_x` starts at `start_x` so a click without any move sample still
    /// reads as a zero-distance drag at release.
    pub fn start(&mut self, x: f32, y: f32) {
        self.started = true;
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
    }

    /// Feeds one move sample. Returns `None` when no session is active.
    pub fn on_move(&mut self, x: f32, y: f32, viewport_width: f32) -> Option<DragAction> {
        if !self.started {
            return None;
        }
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        if dx.abs() < dy.abs() {
            return Some(DragAction::Ignore);
        }
        self.last_x = x;
        Some(DragAction::Follow {
            delta: dx,
            progression: progression(dx, viewport_width),
        })
    }

    /// Closes the session and returns the committed horizontal distance.
    pub fn end(&mut self) -> f32 {
        self.started = false;
        self.last_x - self.start_x
    }

    /// Whether a session is currently active.
    pub fn is_active(&self) -> bool {
        self.started
    }
}

fn progression(dx: f32, viewport_width: f32) -> f32 {
    if viewport_width <= 0.0 {
        return 0.0;
    }
    (100.0 * dx / viewport_width).floor() / 2000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_session_is_noop() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.on_move(50.0, 0.0, 300.0), None);
    }

    #[test]
    fn test_vertical_motion_is_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.start(100.0, 100.0);
        assert_eq!(tracker.on_move(110.0, 180.0, 300.0), Some(DragAction::Ignore));
        // An ignored sample must not advance the committed distance.
        assert_eq!(tracker.end(), 0.0);
    }

    #[test]
    fn test_horizontal_motion_follows() {
        let mut tracker = GestureTracker::default();
        tracker.start(100.0, 100.0);
        let action = tracker.on_move(40.0, 110.0, 300.0);
        assert_eq!(
            action,
            Some(DragAction::Follow {
                delta: -60.0,
                progression: -0.01,
            })
        );
        assert_eq!(tracker.end(), -60.0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_moveless_click_commits_zero_distance() {
        let mut tracker = GestureTracker::default();
        tracker.start(42.0, 7.0);
        assert_eq!(tracker.end(), 0.0);
    }

    #[test]
    fn test_progression_quantization() {
        // floor(100 * 75 / 300) / 2000 = 25 / 2000
        assert_eq!(progression(75.0, 300.0), 0.0125);
        assert_eq!(progression(-75.0, 300.0), -0.0125);
        assert_eq!(progression(10.0, 0.0), 0.0);
    }
}
