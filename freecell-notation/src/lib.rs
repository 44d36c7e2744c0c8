//! Text formats for FreeCell layouts.
//!
//! The oneline format packs a whole deal onto one line for golden files
//! and piping; the layout module renders deals and full positions for
//! people. Parsing reports problems through `ParseError` rather than
//! panicking on malformed input.

use std::fmt;

use freecell_core::{Card, Rank, Suit};

pub mod layout;
pub mod oneline;

pub use layout::{format_board, format_rows};
pub use oneline::{format_oneline, parse_oneline, LayoutRecord};

/// Error from parsing layout text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Format a card as its two-character code, rank then suit
pub fn format_card(card: Card) -> String {
    format!("{}{}", card.rank.to_char(), card.suit.to_char())
}

/// Parse a two-character code like "JD" into a card
pub fn parse_card(code: &str) -> Result<Card, ParseError> {
    let mut chars = code.chars();
    let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(ParseError::new(format!(
            "Card code {:?} is not two characters",
            code
        )));
    };
    let rank = Rank::from_char(rank_char)
        .ok_or_else(|| ParseError::new(format!("Unknown rank character {:?}", rank_char)))?;
    let suit = Suit::from_char(suit_char)
        .ok_or_else(|| ParseError::new(format!("Unknown suit character {:?}", suit_char)))?;
    Ok(Card::new(suit, rank))
}
