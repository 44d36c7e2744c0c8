use crate::card::{Card, Rank, Suit};

/// Number of cards in a deck
pub const DECK_SIZE: usize = 52;

/// Stable identity of one card for the lifetime of a game.
///
/// The value is the card's deck index (see `Card::from_index`). Piles hold
/// ids, never cards, and resolve them against the owning `Deck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub(crate) u8);

impl CardId {
    /// Wrap a deck index (0-51)
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(CardId(index))
        } else {
            None
        }
    }

    /// Get the deck index of the card
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// The card arena for one game.
///
/// Identity (suit and rank) never changes after creation. The face-up flag
/// is the only mutable per-card state; FreeCell deals everything open, but
/// the flag is kept per card so a layout can start with hidden cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    face_up: [bool; DECK_SIZE],
}

impl Deck {
    /// Build the standard 52-card deck with every card face-up.
    pub fn standard() -> Self {
        let mut cards = [Card::new(Suit::Clubs, Rank::Ace); DECK_SIZE];
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let card = Card::new(suit, rank);
                cards[card.to_index() as usize] = card;
            }
        }
        Deck {
            cards,
            face_up: [true; DECK_SIZE],
        }
    }

    /// Resolve an id to its card
    pub fn card(&self, id: CardId) -> Card {
        self.cards[id.index()]
    }

    pub fn is_face_up(&self, id: CardId) -> bool {
        self.face_up[id.index()]
    }

    pub fn set_face_up(&mut self, id: CardId, face_up: bool) {
        self.face_up[id.index()] = face_up;
    }

    /// Iterate over every card id in deck order
    pub fn ids() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}
