//! Prev/next control visibility policy.

/// Visibility of the two navigation controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlVisibility {
    /// Whether the "previous" control should be shown.
    pub prev: bool,
    /// Whether the "next" control should be shown.
    pub next: bool,
}

impl ControlVisibility {
    /// Both controls hidden.
    pub const HIDDEN: Self = Self {
        prev: false,
        next: false,
    };
}

/// Derives control visibility from the deck position.
///
/// An empty deck and a gated deck (sliding disabled) hide both controls;
/// otherwise the controls at the deck's ends are hidden.
pub fn control_visibility(current: usize, num_slides: usize, gated: bool) -> ControlVisibility {
    if num_slides == 0 || gated {
        return ControlVisibility::HIDDEN;
    }
    ControlVisibility {
        prev: current > 0,
        next: current < num_slides - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_hide_one_control() {
        assert_eq!(
            control_visibility(0, 5, false),
            ControlVisibility {
                prev: false,
                next: true
            }
        );
        assert_eq!(
            control_visibility(4, 5, false),
            ControlVisibility {
                prev: true,
                next: false
            }
        );
        assert_eq!(
            control_visibility(2, 5, false),
            ControlVisibility {
                prev: true,
                next: true
            }
        );
    }

    #[test]
    fn test_single_card_hides_both() {
        assert_eq!(control_visibility(0, 1, false), ControlVisibility::HIDDEN);
    }

    #[test]
    fn test_empty_deck_hides_both() {
        assert_eq!(control_visibility(0, 0, false), ControlVisibility::HIDDEN);
    }

    #[test]
    fn test_gated_deck_hides_both() {
        assert_eq!(control_visibility(2, 5, true), ControlVisibility::HIDDEN);
    }
}
