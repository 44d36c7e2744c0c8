//! Placement legality for the two build areas.
//!
//! The predicates answer yes or no and never touch game state; every
//! validity query in the engine reduces to one of them.

use crate::card::{Card, Rank};

/// True when `card` may land on a tableau pile whose exposed card is `top`.
/// An empty pile (`None`) accepts any card.
pub fn tableau_accepts(card: Card, top: Option<Card>) -> bool {
    match top {
        None => true,
        Some(top) => card.color() != top.color() && card.rank as u8 + 1 == top.rank as u8,
    }
}

/// True when `card` may land on a foundation whose exposed card is `top`.
/// An empty foundation (`None`) accepts only an ace; after that the pile
/// builds up in suit.
pub fn foundation_accepts(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank as u8 == top.rank as u8 + 1,
    }
}

/// True when the slice is a movable run: each card sits on the previous one
/// by tableau rules. Empty and single-card slices count as runs.
pub fn is_movable_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| tableau_accepts(pair[1], Some(pair[0])))
}
