//! Core FreeCell engine: dealing, rules, move planning, and game state.
//!
//! The engine is UI-free. It deals the classic numbered layouts, answers
//! validity questions, applies the moves a front end has already
//! validated, and plans multi-card moves as sequences of legal
//! single-card steps.

pub mod board;
pub mod card;
pub mod deal;
pub mod deck;
pub mod game;
pub mod history;
pub mod planner;
pub mod rules;

#[cfg(test)]
mod test_util;

pub use board::Location;
pub use card::{Card, Color, Rank, Suit};
pub use deal::{Dealer, PILE_COUNT};
pub use deck::{CardId, Deck, DECK_SIZE};
pub use game::{FoundationMove, Game};
pub use history::MoveRecord;
pub use planner::{max_move_size, PlannedMove};
pub use rules::{foundation_accepts, is_movable_run, tableau_accepts};
