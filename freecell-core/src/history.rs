use crate::board::{Board, Location};
use crate::deck::{CardId, Deck};

/// Record of the most recent committed move.
///
/// Only one record is kept, so undo reaches back exactly one step. A new
/// move overwrites the record and an undo consumes it; there is no redo.
/// `flipped` names the card the move turned face-up when its removal
/// exposed it; undo turns that card back down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRecord {
    /// A single card moved between two locations
    Card {
        card: CardId,
        from: Location,
        to: Location,
        flipped: Option<CardId>,
    },
    /// A run moved in one piece between two tableau piles
    Stack {
        cards: Vec<CardId>,
        from: usize,
        to: usize,
        flipped: Option<CardId>,
    },
}

impl MoveRecord {
    /// Put the moved cards back where they came from and re-hide the card
    /// the move exposed, restoring the exact prior arrangement.
    pub(crate) fn revert(self, board: &mut Board, deck: &mut Deck) {
        match self {
            MoveRecord::Card {
                card,
                from,
                to,
                flipped,
            } => {
                match to {
                    Location::FreeCell(i) => board.free_cells[i] = None,
                    Location::Foundation(i) => {
                        board.foundations[i].pop();
                    }
                    Location::Tableau(i) => {
                        board.tableau[i].pop();
                    }
                }
                if let Some(hidden) = flipped {
                    deck.set_face_up(hidden, false);
                }
                match from {
                    Location::FreeCell(i) => board.free_cells[i] = Some(card),
                    Location::Foundation(i) => board.foundations[i].push(card),
                    Location::Tableau(i) => board.tableau[i].push(card),
                }
            }
            MoveRecord::Stack {
                cards,
                from,
                to,
                flipped,
            } => {
                let pile = &mut board.tableau[to];
                pile.truncate(pile.len().saturating_sub(cards.len()));
                if let Some(hidden) = flipped {
                    deck.set_face_up(hidden, false);
                }
                board.tableau[from].extend(cards);
            }
        }
    }
}
