//! Slot assignment.
//!
//! Maps slot roles to their visual transforms and keeps exclusive roles
//! unique: before a card takes a role, any other card holding it is parked
//! back to [`Role::Unassigned`].

use crate::{
    card::{Card, Role},
    host::{CardTransform, DeckHost},
};

/// Computes role transforms and pushes assignments through the host.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SlotAssigner {
    viewport_width: f32,
    shrink: f32,
}

impl SlotAssigner {
    pub(crate) fn new(viewport_width: f32, shrink: f32) -> Self {
        Self {
            viewport_width: viewport_width.max(0.0),
            shrink,
        }
    }

    pub(crate) fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
    }

    pub(crate) fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// The transform contract for each slot.
    pub(crate) fn transform_for(&self, role: Role) -> CardTransform {
        match role {
            Role::Current => CardTransform::IDENTITY,
            Role::Previous => CardTransform::new(-self.viewport_width, 1.0),
            Role::Next | Role::Unassigned => CardTransform::new(0.0, self.shrink),
        }
    }

    /// Gives `role` to the card at `index` and moves it into the slot's
    /// transform.
    ///
    /// Out-of-range indices are a no-op; requesting a neighbor that does not
    /// exist must degrade silently.
    pub(crate) fn assign<H: DeckHost>(
        &self,
        cards: &mut [Card],
        host: &mut H,
        index: usize,
        role: Role,
        animated: bool,
    ) {
        if index >= cards.len() {
            return;
        }

        // Exclusive roles evict their previous holder.
        if role != Role::Unassigned {
            for card in cards.iter_mut() {
                if card.index != index && card.role == role {
                    card.role = Role::Unassigned;
                    host.set_transform(card.index, self.transform_for(Role::Unassigned), false);
                }
            }
        }

        cards[index].role = role;
        host.set_transform(index, self.transform_for(role), animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<(usize, CardTransform, bool)>,
    }

    impl DeckHost for RecordingHost {
        fn card_count(&self) -> usize {
            0
        }

        fn viewport_width(&self) -> f32 {
            300.0
        }

        fn set_transform(&mut self, card: usize, transform: CardTransform, animated: bool) {
            self.calls.push((card, transform, animated));
        }
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n).map(Card::new).collect()
    }

    #[test]
    fn test_transform_contract() {
        let slots = SlotAssigner::new(300.0, 0.96);
        assert_eq!(slots.transform_for(Role::Current), CardTransform::IDENTITY);
        assert_eq!(
            slots.transform_for(Role::Previous),
            CardTransform::new(-300.0, 1.0)
        );
        assert_eq!(slots.transform_for(Role::Next), CardTransform::new(0.0, 0.96));
        assert_eq!(
            slots.transform_for(Role::Unassigned),
            CardTransform::new(0.0, 0.96)
        );
    }

    #[test]
    fn test_exclusive_role_evicts_previous_holder() {
        let slots = SlotAssigner::new(300.0, 0.96);
        let mut cards = cards(3);
        let mut host = RecordingHost::default();

        slots.assign(&mut cards, &mut host, 0, Role::Current, false);
        slots.assign(&mut cards, &mut host, 1, Role::Current, true);

        assert_eq!(cards[0].role, Role::Unassigned);
        assert_eq!(cards[1].role, Role::Current);
        // Eviction is unanimated and precedes the new assignment.
        assert_eq!(
            host.calls,
            vec![
                (0, CardTransform::IDENTITY, false),
                (0, CardTransform::new(0.0, 0.96), false),
                (1, CardTransform::IDENTITY, true),
            ]
        );
    }

    #[test]
    fn test_unassigned_does_not_evict() {
        let slots = SlotAssigner::new(300.0, 0.96);
        let mut cards = cards(3);
        let mut host = RecordingHost::default();

        slots.assign(&mut cards, &mut host, 2, Role::Unassigned, false);
        assert_eq!(cards[0].role, Role::Unassigned);
        assert_eq!(host.calls.len(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let slots = SlotAssigner::new(300.0, 0.96);
        let mut cards = cards(2);
        let mut host = RecordingHost::default();

        slots.assign(&mut cards, &mut host, 5, Role::Next, true);
        assert!(host.calls.is_empty());
    }
}
