//! The external collaborator seam.
//!
//! The deck core never touches a rendering tree. Everything it needs from the
//! outside world — the card inventory, the viewport width, and a way to move
//! cards — goes through [`DeckHost`], so any backend that can translate and
//! scale a card can drive the widget.

use crate::controls::ControlVisibility;

/// A translation-plus-scale visual transform for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Horizontal offset in viewport units.
    pub translate_x: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl CardTransform {
    /// A transform at the origin with no scaling.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        scale: 1.0,
    };

    /// Builds a transform from its two components.
    pub const fn new(translate_x: f32, scale: f32) -> Self {
        Self { translate_x, scale }
    }
}

/// Rendering backend and geometry provider for a deck.
///
/// `set_transform` is the whole rendering contract: the host decides whether
/// that means CSS, a canvas, or a native view layer, and whether `animated`
/// maps to an eased transition. The remaining methods are notifications with
/// no-op defaults.
pub trait DeckHost {
    /// Number of cards available at mount time.
    fn card_count(&self) -> usize;

    /// Current viewport width; re-read by the deck on resize.
    fn viewport_width(&self) -> f32;

    /// Moves `card` to `transform`, optionally over an eased transition.
    fn set_transform(&mut self, card: usize, transform: CardTransform, animated: bool);

    /// Called whenever prev/next control visibility changes.
    fn controls_changed(&mut self, _visibility: ControlVisibility) {}

    /// Called after every committed navigation, with the new current index.
    fn deck_updated(&mut self, _current: usize) {}

    /// Live drag progression ratio, for supplementary feedback effects.
    fn drag_progression(&mut self, _ratio: f32) {}
}
