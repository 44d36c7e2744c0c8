//! Small helpers shared by the unit tests.

use crate::card::{Card, Rank, Suit};
use crate::deck::CardId;

/// Parse a two-character code like "JD" into a card.
pub(crate) fn card(code: &str) -> Card {
    let mut chars = code.chars();
    let rank = chars
        .next()
        .and_then(Rank::from_char)
        .unwrap_or_else(|| panic!("Bad rank in card code {:?}", code));
    let suit = chars
        .next()
        .and_then(Suit::from_char)
        .unwrap_or_else(|| panic!("Bad suit in card code {:?}", code));
    Card::new(suit, rank)
}

/// Parse a two-character code into the card's id.
pub(crate) fn id(code: &str) -> CardId {
    CardId(card(code).to_index())
}

/// Parse a list of codes into a pile of ids.
pub(crate) fn ids(codes: &[&str]) -> Vec<CardId> {
    codes.iter().map(|code| id(code)).collect()
}
