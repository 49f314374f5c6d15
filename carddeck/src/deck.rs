//! The navigation engine and public deck API.
//!
//! [`Deck`] owns the whole widget state: the card table, the current index,
//! the gesture session and the in-flight transition. Pointer events, control
//! presses and programmatic jumps all funnel into [`Deck::jump_to`], which
//! enforces the at-most-one-in-flight-transition policy: a navigation request
//! arriving while a transition is running is dropped, never queued.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    animation::{AnimationScheduler, Continuation},
    card::{Card, Role},
    config::DeckArgs,
    controls::control_visibility,
    gesture::{DragAction, GestureTracker},
    host::{CardTransform, DeckHost},
    slots::SlotAssigner,
};

/// How the embedder should treat the platform event behind a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResponse {
    /// The sample was vertical or outside a session; let default handling
    /// (e.g. page scrolling) proceed.
    PassThrough,
    /// The sample drove a live follow; suppress default handling.
    Captured,
}

/// A card-deck carousel bound to a [`DeckHost`].
pub struct Deck<H: DeckHost> {
    host: H,
    args: DeckArgs,
    cards: SmallVec<[Card; 8]>,
    current: usize,
    slots: SlotAssigner,
    gesture: GestureTracker,
    scheduler: AnimationScheduler,
    sliding_enabled: bool,
    stale_geometry: bool,
}

impl<H: DeckHost> Deck<H> {
    /// Mounts a deck over the host's cards.
    ///
    /// Card 0 is settled as current and card 1 (if any) behind it; every
    /// other card is parked. All initial placement is unanimated.
    pub fn mount(host: H, args: DeckArgs) -> Self {
        let args = args.sanitized();
        let count = host.card_count();
        let viewport_width = host.viewport_width();
        let mut deck = Self {
            slots: SlotAssigner::new(viewport_width, args.shrink),
            host,
            args,
            cards: (0..count).map(Card::new).collect(),
            current: 0,
            gesture: GestureTracker::default(),
            scheduler: AnimationScheduler::default(),
            sliding_enabled: true,
            stale_geometry: false,
        };

        for index in 0..count {
            deck.slots
                .assign(&mut deck.cards, &mut deck.host, index, Role::Unassigned, false);
        }
        deck.slots
            .assign(&mut deck.cards, &mut deck.host, 0, Role::Current, false);
        deck.slots
            .assign(&mut deck.cards, &mut deck.host, 1, Role::Next, false);
        deck.push_controls();
        deck
    }

    /// Navigates to an absolute index.
    ///
    /// Silently ignored when the target is out of range, a transition is in
    /// flight, or sliding is disabled.
    pub fn jump_to(&mut self, target: usize, now: Instant) {
        if target >= self.total() {
            trace!(to = target, total = self.total(), "jump target out of range");
            return;
        }
        if !self.sliding_enabled {
            debug!(to = target, "navigation refused, sliding disabled");
            return;
        }
        self.navigate(target, now);
    }

    /// Re-settles the current card's slots without consulting the sliding
    /// gate. The gate governs navigation; geometry refreshes and snap-backs
    /// must land even on a gated deck.
    fn settle(&mut self, now: Instant) {
        if self.current >= self.total() {
            return;
        }
        self.navigate(self.current, now);
    }

    fn navigate(&mut self, target: usize, now: Instant) {
        if self.scheduler.is_animating() {
            debug!(to = target, "navigation refused, transition in flight");
            return;
        }

        let diff = target.abs_diff(self.current);
        debug!(from = self.current, to = target, diff, "navigating");
        let continuation = if diff == 0 {
            self.reaffirm(true);
            Continuation::Resettle
        } else if diff == 1 {
            self.step(target);
            Continuation::CommitStep
        } else {
            self.stage_teleport(target);
            Continuation::TeleportArrive { target }
        };

        if let Some(continuation) = self.scheduler.begin(now, self.args.ease, continuation) {
            self.complete(continuation);
        }
    }

    /// Advances by one card, if not already at the last one.
    pub fn next(&mut self, now: Instant) {
        if self.current + 1 < self.total() {
            self.jump_to(self.current + 1, now);
        }
    }

    /// Retreats by one card, if not already at the first one.
    pub fn prev(&mut self, now: Instant) {
        if self.current > 0 {
            self.jump_to(self.current - 1, now);
        }
    }

    /// Fires a due transition completion. Call from the embedder's event
    /// loop; this is the deck's only asynchronous boundary.
    pub fn tick(&mut self, now: Instant) {
        if let Some(continuation) = self.scheduler.tick(now) {
            self.complete(continuation);
        }
    }

    /// Opens a swipe session at the given point.
    pub fn pointer_start(&mut self, x: f32, y: f32) {
        if !self.sliding_enabled || self.total() == 0 {
            return;
        }
        self.gesture.start(x, y);
    }

    /// Feeds a pointer-move sample to the active session.
    ///
    /// Live follows render unanimated and are never gated by a running
    /// transition.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> MoveResponse {
        match self.gesture.on_move(x, y, self.slots.viewport_width()) {
            None | Some(DragAction::Ignore) => MoveResponse::PassThrough,
            Some(DragAction::Follow { delta, progression }) => {
                self.render_follow(delta);
                self.host.drag_progression(progression);
                MoveResponse::Captured
            }
        }
    }

    /// Closes the swipe session and settles on a target card.
    ///
    /// A release during a running transition ends the session without
    /// issuing a settle decision.
    pub fn pointer_end(&mut self, now: Instant) {
        if !self.gesture.is_active() {
            return;
        }
        let moved = self.gesture.end();
        if self.scheduler.is_animating() {
            debug!(moved, "settle refused, transition in flight");
            return;
        }

        let threshold = self.slots.viewport_width() / self.args.sensitivity;
        let mut target = self.current;
        if moved > threshold && self.current > 0 {
            target -= 1;
        } else if moved < -threshold && self.current + 1 < self.total() {
            target += 1;
        }
        debug!(moved, threshold, to = target, "settling");
        // A gated release never commits a navigation, but the dragged cards
        // still have to snap back to their slots.
        if !self.sliding_enabled || target == self.current {
            self.settle(now);
        } else {
            self.jump_to(target, now);
        }
    }

    /// Re-reads the viewport width and re-settles the visible slots.
    ///
    /// Applies even while sliding is disabled. During a transition the new
    /// width is recorded and the slots catch up when the transition
    /// completes.
    pub fn resized(&mut self, now: Instant) {
        let viewport_width = self.host.viewport_width();
        self.slots.set_viewport_width(viewport_width);
        trace!(viewport_width, "viewport changed");
        if self.scheduler.is_animating() {
            self.stale_geometry = true;
            return;
        }
        self.settle(now);
    }

    /// Gates navigation and hides both controls.
    pub fn disable_sliding(&mut self) {
        self.sliding_enabled = false;
        self.push_controls();
    }

    /// Lifts the navigation gate and restores control visibility.
    pub fn enable_sliding(&mut self) {
        self.sliding_enabled = true;
        self.push_controls();
    }

    /// 1-based number of the current slide; 0 for an empty deck.
    pub fn current(&self) -> usize {
        if self.total() == 0 { 0 } else { self.current + 1 }
    }

    /// 0-based index of the current card.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of cards in the deck.
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Role currently held by the card at `index`, if it exists.
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.cards.get(index).map(|card| card.role)
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-affirms the current and previous slots; animated after a cancelled
    /// or sub-threshold drag, unanimated when catching up on geometry.
    fn reaffirm(&mut self, animated: bool) {
        self.slots.assign(
            &mut self.cards,
            &mut self.host,
            self.current,
            Role::Current,
            animated,
        );
        if self.current > 0 {
            self.slots.assign(
                &mut self.cards,
                &mut self.host,
                self.current - 1,
                Role::Previous,
                animated,
            );
        }
    }

    /// Adjacent-step navigation: the three touched slots are reassigned at
    /// once, with the far-side neighbor staged unanimated.
    fn step(&mut self, target: usize) {
        self.slots
            .assign(&mut self.cards, &mut self.host, target, Role::Current, true);
        if target > self.current {
            self.slots
                .assign(&mut self.cards, &mut self.host, target + 1, Role::Next, false);
            self.slots
                .assign(&mut self.cards, &mut self.host, self.current, Role::Previous, true);
        } else {
            if target > 0 {
                self.slots
                    .assign(&mut self.cards, &mut self.host, target - 1, Role::Previous, false);
            }
            self.slots
                .assign(&mut self.cards, &mut self.host, self.current, Role::Next, true);
        }
        self.current = target;
    }

    /// First phase of a teleport: place the target on the approach side
    /// without animation, then ease it into the current slot. Neighbors and
    /// the index move only once the transition completes.
    fn stage_teleport(&mut self, target: usize) {
        let approach = if target > self.current {
            Role::Next
        } else {
            Role::Previous
        };
        trace!(to = target, ?approach, "staging teleport");
        self.slots
            .assign(&mut self.cards, &mut self.host, target, approach, false);
        self.slots
            .assign(&mut self.cards, &mut self.host, target, Role::Current, true);
    }

    fn complete(&mut self, continuation: Continuation) {
        match continuation {
            Continuation::Resettle => self.push_controls(),
            Continuation::CommitStep => self.commit(),
            Continuation::TeleportArrive { target } => {
                if target > 0 {
                    self.slots
                        .assign(&mut self.cards, &mut self.host, target - 1, Role::Previous, false);
                }
                self.slots
                    .assign(&mut self.cards, &mut self.host, target + 1, Role::Next, false);
                self.current = target;
                self.commit();
            }
        }
        // A resize that arrived mid-transition left the slots derived from
        // the old width; re-derive them now that the transition has landed.
        if self.stale_geometry {
            self.stale_geometry = false;
            self.reaffirm(false);
        }
    }

    fn commit(&mut self) {
        if self.args.prevent_advance {
            self.sliding_enabled = false;
        }
        self.push_controls();
        self.host.deck_updated(self.current);
    }

    fn push_controls(&mut self) {
        let visibility = control_visibility(self.current, self.total(), !self.sliding_enabled);
        self.host.controls_changed(visibility);
    }

    /// Renders the two-card live-follow choreography: one card locked at its
    /// slot edge, the other tracking the finger. Translation only; scale is
    /// left at the slot's value of 1.
    fn render_follow(&mut self, delta: f32) {
        if self.current >= self.total() {
            return;
        }
        let width = self.slots.viewport_width();
        let previous = self.current.checked_sub(1);
        if delta <= 0.0 {
            if let Some(previous) = previous {
                self.host
                    .set_transform(previous, CardTransform::new(-width, 1.0), false);
            }
            self.host
                .set_transform(self.current, CardTransform::new(delta, 1.0), false);
        } else {
            self.host
                .set_transform(self.current, CardTransform::IDENTITY, false);
            if let Some(previous) = previous {
                self.host
                    .set_transform(previous, CardTransform::new(delta - width, 1.0), false);
            }
        }
    }

    /// Checks the settled-state role invariant. Test support.
    #[cfg(test)]
    fn assert_settled(&self) {
        assert!(!self.is_animating());
        for card in &self.cards {
            let expected = if card.index == self.current {
                Role::Current
            } else if self.current > 0 && card.index == self.current - 1 {
                Role::Previous
            } else if card.index == self.current + 1 {
                Role::Next
            } else {
                Role::Unassigned
            };
            assert_eq!(card.role, expected, "card {}", card.index);
        }
    }
}
