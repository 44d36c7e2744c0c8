use crate::board::{Board, Location};
use crate::card::Card;
use crate::deal::Dealer;
use crate::deck::{CardId, Deck};
use crate::history::MoveRecord;
use crate::planner::{self, PlannedMove};
use crate::rules;

/// A move some card could make to a foundation right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationMove {
    pub card: CardId,
    pub from: Location,
    pub foundation: usize,
}

/// One FreeCell game.
///
/// Owns the card arena and the piles, applies moves, and remembers the
/// most recent one for undo. Mutations are applied as given: callers run
/// the validity queries first, and a move that was never offered as valid
/// is a caller bug rather than something the engine detects.
pub struct Game {
    game_number: u32,
    deck: Deck,
    board: Board,
    last_move: Option<MoveRecord>,
}

impl Game {
    /// Deal a new game. The same number always produces the same board.
    pub fn new(game_number: u32) -> Self {
        Game {
            game_number,
            deck: Deck::standard(),
            board: Board::new(Dealer::new(game_number).deal()),
            last_move: None,
        }
    }

    /// Assemble an arbitrary position instead of dealing one.
    ///
    /// The caller is responsible for a consistent arrangement with each
    /// card id in at most one place. The game reports number 0.
    pub fn from_parts(
        free_cells: [Option<CardId>; 4],
        foundations: [Vec<CardId>; 4],
        tableau: [Vec<CardId>; 8],
    ) -> Self {
        Game {
            game_number: 0,
            deck: Deck::standard(),
            board: Board::from_parts(free_cells, foundations, tableau),
            last_move: None,
        }
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access to the arena, for setting up face-down layouts.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Resolve a card id against the arena
    pub fn card(&self, id: CardId) -> Card {
        self.deck.card(id)
    }

    pub fn free_cells(&self) -> &[Option<CardId>; 4] {
        &self.board.free_cells
    }

    pub fn foundations(&self) -> &[Vec<CardId>; 4] {
        &self.board.foundations
    }

    pub fn tableau(&self) -> &[Vec<CardId>; 8] {
        &self.board.tableau
    }

    pub fn tableau_pile(&self, pile: usize) -> &[CardId] {
        &self.board.tableau[pile]
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Find a card among the free cells and exposed tableau cards. Buried
    /// and foundation cards have no pickup location and report `None`.
    pub fn card_location(&self, card: CardId) -> Option<Location> {
        self.board.card_location(card)
    }

    /// True when the card may land on the given tableau pile right now.
    pub fn is_tableau_move_valid(&self, card: CardId, pile: usize) -> bool {
        rules::tableau_accepts(self.deck.card(card), self.tableau_top(pile))
    }

    /// True when the card may land on the given foundation right now.
    pub fn is_foundation_move_valid(&self, card: CardId, foundation: usize) -> bool {
        let top = self.board.foundations[foundation]
            .last()
            .map(|&id| self.deck.card(id));
        rules::foundation_accepts(self.deck.card(card), top)
    }

    /// Current supermove capacity over the whole board.
    pub fn max_move_size(&self) -> usize {
        planner::max_move_size(
            self.board.empty_free_cells(),
            self.board.empty_tableau_piles(),
        )
    }

    /// Supermove capacity toward one destination pile. An empty destination
    /// does not count as its own scratch column.
    pub fn max_move_size_to(&self, dest: usize) -> usize {
        let mut empty_piles = self.board.empty_tableau_piles();
        if self.board.tableau[dest].is_empty() {
            empty_piles = empty_piles.saturating_sub(1);
        }
        planner::max_move_size(self.board.empty_free_cells(), empty_piles)
    }

    /// The longest movable run at the top of a tableau pile, bottom first.
    ///
    /// The run extends downward while each card is face-up and the card
    /// above it stacks by tableau rules. An empty pile, or a face-down
    /// top card, gives an empty run.
    pub fn movable_run(&self, pile: usize) -> &[CardId] {
        let cards = self.board.tableau[pile].as_slice();
        let mut start = cards.len();
        while start > 0 {
            let id = cards[start - 1];
            if !self.deck.is_face_up(id) {
                break;
            }
            if start < cards.len() {
                let above = self.deck.card(cards[start]);
                if !rules::tableau_accepts(above, Some(self.deck.card(id))) {
                    break;
                }
            }
            start -= 1;
        }
        &cards[start..]
    }

    /// The largest tail of the source pile's movable run that fits the
    /// capacity toward `to` and that the destination accepts.
    pub fn stack_to_move(&self, from: usize, to: usize) -> Option<&[CardId]> {
        let run = self.movable_run(from);
        let max = self.max_move_size_to(to);
        let top = self.tableau_top(to);
        for start in 0..run.len() {
            let tail = &run[start..];
            if tail.len() <= max && rules::tableau_accepts(self.deck.card(tail[0]), top) {
                return Some(tail);
            }
        }
        None
    }

    /// Every card that could go to a foundation right now: free cells
    /// first, then tableau tops, each paired with the first foundation
    /// that accepts it.
    pub fn foundation_moves(&self) -> Vec<FoundationMove> {
        let mut candidates = Vec::new();
        for (i, cell) in self.board.free_cells.iter().enumerate() {
            if let Some(card) = *cell {
                candidates.push((card, Location::FreeCell(i)));
            }
        }
        for (i, pile) in self.board.tableau.iter().enumerate() {
            if let Some(&card) = pile.last() {
                candidates.push((card, Location::Tableau(i)));
            }
        }

        let mut moves = Vec::new();
        for (card, from) in candidates {
            for foundation in 0..self.board.foundations.len() {
                if self.is_foundation_move_valid(card, foundation) {
                    moves.push(FoundationMove {
                        card,
                        from,
                        foundation,
                    });
                    break;
                }
            }
        }
        moves
    }

    /// True once all four foundations hold a full suit.
    pub fn is_won(&self) -> bool {
        self.board.foundations.iter().all(|pile| pile.len() == 13)
    }

    /// Plan moving a run between tableau piles as single-card steps. See
    /// the capacity methods for when a plan exists.
    pub fn supermove_plan(&self, run: &[CardId], from: usize, to: usize) -> Vec<PlannedMove> {
        planner::supermove_plan(&self.board, run, from, to)
    }

    /// Move one card between two locations and record it for undo.
    pub fn move_card(&mut self, card: CardId, from: Location, to: Location) {
        match from {
            Location::FreeCell(i) => self.board.free_cells[i] = None,
            Location::Foundation(i) => {
                self.board.foundations[i].pop();
            }
            Location::Tableau(i) => {
                self.board.tableau[i].pop();
            }
        }
        let flipped = match from {
            Location::Tableau(i) => self.expose_top(i),
            _ => None,
        };
        match to {
            Location::FreeCell(i) => self.board.free_cells[i] = Some(card),
            Location::Foundation(i) => self.board.foundations[i].push(card),
            Location::Tableau(i) => self.board.tableau[i].push(card),
        }
        self.last_move = Some(MoveRecord::Card {
            card,
            from,
            to,
            flipped,
        });
    }

    /// Move a run in one piece between tableau piles and record it for
    /// undo. The run must be the exposed tail of the source pile.
    pub fn move_stack(&mut self, cards: &[CardId], from: usize, to: usize) {
        let pile = &mut self.board.tableau[from];
        pile.truncate(pile.len().saturating_sub(cards.len()));
        let flipped = self.expose_top(from);
        self.board.tableau[to].extend_from_slice(cards);
        self.last_move = Some(MoveRecord::Stack {
            cards: cards.to_vec(),
            from,
            to,
            flipped,
        });
    }

    /// Take back the most recent move. Returns false when there is
    /// nothing to undo; a second undo in a row always does.
    pub fn undo(&mut self) -> bool {
        match self.last_move.take() {
            Some(record) => {
                record.revert(&mut self.board, &mut self.deck);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.last_move.is_some()
    }

    fn tableau_top(&self, pile: usize) -> Option<Card> {
        self.board.tableau[pile].last().map(|&id| self.deck.card(id))
    }

    /// Turn the new top of a pile face-up after a removal. Returns the
    /// card that was flipped, if any.
    fn expose_top(&mut self, pile: usize) -> Option<CardId> {
        let &top = self.board.tableau[pile].last()?;
        if self.deck.is_face_up(top) {
            None
        } else {
            self.deck.set_face_up(top, true);
            Some(top)
        }
    }
}
