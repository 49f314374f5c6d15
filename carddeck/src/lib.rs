//! A renderer-agnostic card-deck carousel core.
//!
//! A deck is a stack of cards the user advances through with buttons, swipe
//! gestures or mouse drags. This crate owns the gesture-to-position state
//! machine — live-follow transforms during a drag, the settle decision at
//! release, and the slot choreography for single steps and multi-card
//! teleports — and delegates everything visual to a [`DeckHost`]: the deck
//! asks the host for the viewport width and tells it where each card goes.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use carddeck::{CardTransform, Deck, DeckArgs, DeckHost};
//!
//! struct PrintHost;
//!
//! impl DeckHost for PrintHost {
//!     fn card_count(&self) -> usize {
//!         3
//!     }
//!
//!     fn viewport_width(&self) -> f32 {
//!         320.0
//!     }
//!
//!     fn set_transform(&mut self, card: usize, transform: CardTransform, animated: bool) {
//!         println!("card {card}: {transform:?} (animated: {animated})");
//!     }
//! }
//!
//! let mut deck = Deck::mount(PrintHost, DeckArgs::default());
//! let now = Instant::now();
//! deck.next(now);
//! assert_eq!(deck.current(), 2);
//!
//! // The embedder's event loop drives transition completions.
//! deck.tick(now + std::time::Duration::from_millis(250));
//! assert!(!deck.is_animating());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;
mod slots;

pub mod card;
pub mod config;
pub mod controls;
pub mod deck;
pub mod gesture;
pub mod host;

pub use card::{Card, Role};
pub use config::DeckArgs;
pub use controls::{ControlVisibility, control_visibility};
pub use deck::{Deck, MoveResponse};
pub use gesture::{DragAction, GestureTracker};
pub use host::{CardTransform, DeckHost};
