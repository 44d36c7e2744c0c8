use crate::deck::{CardId, DECK_SIZE};
use msrand::MsRand;

/// Number of tableau piles dealt
pub const PILE_COUNT: usize = 8;

/// Deals the classic numbered layouts.
///
/// A game number seeds the Microsoft C runtime generator and the 52 cards
/// are drawn from a shrinking working array, round-robin across the eight
/// piles. Every implementation that agrees on this procedure deals the
/// same board for the same number.
pub struct Dealer {
    rng: MsRand,
}

impl Dealer {
    /// Create a dealer for a game number. Any u32 works; the classic
    /// catalogue covers 1 through 32000.
    pub fn new(game_number: u32) -> Self {
        let mut rng = MsRand::new();
        rng.srand(game_number);
        Dealer { rng }
    }

    /// Deal the full deck into eight piles.
    ///
    /// Each draw picks a random slot of the working array and refills that
    /// slot from the tail. The refill is an overwrite, not a swap: the
    /// displaced tail card changes every later draw, and the classic
    /// layouts depend on exactly this.
    pub fn deal(mut self) -> [Vec<CardId>; PILE_COUNT] {
        let mut deck = [0u8; DECK_SIZE];
        for (slot, index) in deck.iter_mut().zip(0..DECK_SIZE as u8) {
            *slot = index;
        }

        let mut piles: [Vec<CardId>; PILE_COUNT] = Default::default();
        let mut remaining = DECK_SIZE;
        for i in 0..DECK_SIZE {
            let j = self.rng.max_rand(remaining as u32) as usize;
            piles[i % PILE_COUNT].push(CardId(deck[j]));
            remaining -= 1;
            deck[j] = deck[remaining];
        }
        piles
    }
}
