//! Deck configuration.
//!
//! Replaces the loose options-merge style of ad-hoc widget setups with a
//! typed argument struct and consuming builder setters.

use derive_setters::Setters;

const DEFAULT_EASE_SECONDS: f32 = 0.2;
const DEFAULT_SHRINK: f32 = 0.96;
const DEFAULT_SENSITIVITY: f32 = 5.0;

const MIN_SHRINK: f32 = 0.01;
const MIN_SENSITIVITY: f32 = 1.0;

/// Configuration arguments for a [`Deck`](crate::Deck).
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct DeckArgs {
    /// Duration in seconds of an eased slot transition.
    pub ease: f32,
    /// Scale applied to cards parked behind the current one.
    pub shrink: f32,
    /// Divisor of the viewport width defining the swipe commit threshold.
    pub sensitivity: f32,
    /// Whether every committed navigation disables further sliding until
    /// explicitly re-enabled.
    pub prevent_advance: bool,
}

impl Default for DeckArgs {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE_SECONDS,
            shrink: DEFAULT_SHRINK,
            sensitivity: DEFAULT_SENSITIVITY,
            prevent_advance: false,
        }
    }
}

impl DeckArgs {
    /// Clamps every field into its usable range.
    ///
    /// The deck is driven by untrusted input and configuration alike; a
    /// nonsensical value degrades to the nearest usable one rather than
    /// failing.
    pub(crate) fn sanitized(mut self) -> Self {
        if !self.ease.is_finite() || self.ease < 0.0 {
            self.ease = 0.0;
        }
        if !self.shrink.is_finite() {
            self.shrink = DEFAULT_SHRINK;
        }
        self.shrink = self.shrink.clamp(MIN_SHRINK, 1.0);
        if !self.sensitivity.is_finite() {
            self.sensitivity = DEFAULT_SENSITIVITY;
        }
        self.sensitivity = self.sensitivity.max(MIN_SENSITIVITY);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = DeckArgs::default();
        assert_eq!(args.ease, 0.2);
        assert_eq!(args.shrink, 0.96);
        assert_eq!(args.sensitivity, 5.0);
        assert!(!args.prevent_advance);
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let args = DeckArgs::default()
            .ease(-1.0)
            .shrink(7.5)
            .sensitivity(0.0)
            .sanitized();
        assert_eq!(args.ease, 0.0);
        assert_eq!(args.shrink, 1.0);
        assert_eq!(args.sensitivity, 1.0);
    }

    #[test]
    fn test_sanitize_replaces_non_finite_values() {
        let args = DeckArgs::default()
            .ease(f32::NAN)
            .shrink(f32::INFINITY)
            .sensitivity(f32::NAN)
            .sanitized();
        assert_eq!(args.ease, 0.0);
        assert_eq!(args.shrink, 0.96);
        assert_eq!(args.sensitivity, 5.0);
    }
}
