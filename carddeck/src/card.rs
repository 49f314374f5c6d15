//! Logical card model.

/// Visual slot a card can occupy.
///
/// At any settled state exactly one card holds [`Role::Current`], at most one
/// holds [`Role::Previous`] and at most one holds [`Role::Next`]; everything
/// else is parked as [`Role::Unassigned`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// The card occupying the viewport.
    Current,
    /// The card slid off the left edge, ready to slide back in.
    Previous,
    /// The card stacked behind the current one.
    Next,
    /// Any card not adjacent to the current one.
    #[default]
    Unassigned,
}

/// A logical card: an immutable index plus its mutable slot role.
///
/// Cards are created at mount time and never destroyed; navigation reassigns
/// roles, not cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    /// Position of the card in the deck, fixed for the deck's lifetime.
    pub index: usize,
    /// The slot this card currently occupies.
    pub role: Role,
}

impl Card {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            role: Role::Unassigned,
        }
    }
}
